//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant names the operation that failed together with the offending
//! shape or value, so callers can tell bad input apart from engine failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{op}: invalid argument: {reason}")]
    InvalidArgument { op: &'static str, reason: String },

    #[error("{op}: no element of stack with shape {shape:?} exceeds threshold {threshold:e}")]
    EmptyResult {
        op: &'static str,
        threshold: f32,
        shape: [usize; 3],
    },

    #[error("{op}: expected shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        op: &'static str,
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }

    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    /// True for failures caused by the caller's input rather than by I/O or an engine.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. } | Error::EmptyResult { .. }
        )
    }
}
