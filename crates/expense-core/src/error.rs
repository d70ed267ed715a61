//! Error types for expense store operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Core error type for store operations.
#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Invalid user input (malformed amount, bad identifier, bad date)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A table constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be opened
    #[error("Connection error: {0}")]
    Connection(String),

    /// Schema bootstrap failed
    #[error("Schema error: {0}")]
    Schema(String),

    /// Any other storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let detail = message.clone().unwrap_or_else(|| failure.to_string());
                ExpenseError::ConstraintViolation(detail)
            }
            other => ExpenseError::Storage(other.to_string()),
        }
    }
}
