//! Core error types for the ledger reporting engine.
//!
//! This module defines storage-agnostic error types. Storage adapters convert
//! their own failures into [`DatabaseError`] before handing them to the core.

use thiserror::Error;

use crate::events::EventStatus;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the reporting engine.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested period cannot be resolved for the given anchor yet.
    /// Callers should retry once the period has closed.
    #[error("Invalid period range: {0}")]
    InvalidPeriodRange(String),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Report dispatch failed: {0}")]
    Dispatch(String),

    #[error("Event cannot move from {from} to {to}")]
    InvalidEventTransition { from: EventStatus, to: EventStatus },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True for failures that clear up by themselves once time passes,
    /// such as a quarter that has not closed yet.
    pub fn is_retryable_later(&self) -> bool {
        matches!(self, Error::InvalidPeriodRange(_))
    }
}

/// Storage-agnostic error type for repository operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Insert failed: {0}")]
    InsertFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_period_errors_are_retryable_later() {
        assert!(Error::InvalidPeriodRange("quarter".to_string()).is_retryable_later());
        assert!(!Error::Dispatch("rejected".to_string()).is_retryable_later());
        assert!(!Error::Database(DatabaseError::NotFound("x".to_string())).is_retryable_later());
    }

    #[test]
    fn test_storage_errors_keep_their_message() {
        let err: Error = DatabaseError::InsertFailed("Insert error".to_string()).into();
        assert_eq!(err.to_string(), "Database operation failed: Insert failed: Insert error");
    }
}
