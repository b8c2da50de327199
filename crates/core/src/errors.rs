//! Core error types for the goal tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::goals::GoalError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the goal tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    /// Domain errors are shown to users as-is, so no prefix is added.
    #[error(transparent)]
    Goal(#[from] GoalError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Key-value backend failures, flattened to strings by the storage crate.
///
/// `YearStore` logs and absorbs these; they only reach callers from setup
/// code such as opening the database or running migrations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Anything else, including I/O while preparing the database file.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Field '{field}' exceeds {max} characters")]
    TooLong { field: String, max: usize },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Database(DatabaseError::Internal(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_errors_display_verbatim() {
        let err: Error = GoalError::CapacityExceeded { max: 150 }.into();
        assert_eq!(err.to_string(), "Maximum 150 active goals allowed per year");

        let err: Error = GoalError::NotFound("abc".to_string()).into();
        assert_eq!(err.to_string(), "Goal not found");
    }

    #[test]
    fn test_io_error_maps_to_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: Error = io.into();
        assert!(matches!(err, Error::Database(DatabaseError::Internal(_))));
    }

    #[test]
    fn test_validation_error_is_prefixed() {
        let err: Error = ValidationError::MissingField("title".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'title' is missing"
        );
    }
}
