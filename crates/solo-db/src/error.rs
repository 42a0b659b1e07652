//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type DbResult<T> = Result<T, DbError>;

/// Errors that can occur in the store layer.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("You have already placed a bid on this job")]
    DuplicateBid,

    #[error("Update contains no fields")]
    EmptyUpdate,

    #[error("Database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

impl DbError {
    /// True when the caller sent something unacceptable, as opposed to
    /// the store itself failing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DbError::InvalidId(_) | DbError::DuplicateBid | DbError::EmptyUpdate
        )
    }

    /// True when the driver error is a unique-index violation.
    pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
        use mongodb::error::{ErrorKind, WriteFailure};
        match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == 11000,
            _ => false,
        }
    }
}
