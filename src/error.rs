//! Error types for anonboard.

use thiserror::Error;

/// Common error type for board operations.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Database error.
    ///
    /// Wraps errors from the underlying store; sqlx errors are
    /// converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for client input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found. The payload names the missing entity
    /// ("thread" or "reply"), which the display format turns into the
    /// exact message the API surfaces.
    #[error("{0} not found")]
    NotFound(String),

    /// Delete password did not match the stored secret.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for BoardError {
    fn from(e: sqlx::Error) -> Self {
        BoardError::Database(e.to_string())
    }
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
