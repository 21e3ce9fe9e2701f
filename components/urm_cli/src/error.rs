//! Error types for the CLI

use core_types::MachineError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Scanning or execution failed
    #[error("{0}")]
    Machine(#[from] MachineError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest or report (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Command line did not name anything to run
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
