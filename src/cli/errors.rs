use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid shape: {shape}. Expected three non-negative integers as SEQ,ROWS,COLS")]
    InvalidShape { shape: String },

    #[error(transparent)]
    Library(#[from] tomopad::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
