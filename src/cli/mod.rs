//! Command Line Interface (CLI) layer for tomopad.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves reconstruction
//! parameters and prints the padded geometry plan.
//!
//! If you are embedding tomopad into another application, prefer the
//! library API (`tomopad::api`) instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
