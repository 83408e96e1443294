//! Error types for lapak.

use thiserror::Error;

/// Common error type for lapak.
#[derive(Error, Debug)]
pub enum LapakError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for lapak operations.
pub type Result<T> = std::result::Result<T, LapakError>;
