//! Storage-specific error types for the in-memory backend.
//!
//! These wrap I/O and JSON failures raised while loading seed data and convert
//! them to the database-agnostic error types defined in `ledger_core`.

use ledger_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Duplicate record: {0}")]
    Duplicate(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::SeedIo(e) => Error::Database(DatabaseError::Internal(e.to_string())),
            StorageError::SeedParse(e) => {
                Error::Database(DatabaseError::QueryFailed(e.to_string()))
            }
            StorageError::Duplicate(id) => Error::Database(DatabaseError::UniqueViolation(id)),
        }
    }
}
