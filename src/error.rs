//! Error types for recuerdos.

use thiserror::Error;

/// Common error type for recuerdos.
#[derive(Error, Debug)]
pub enum RecuerdosError {
    /// Database error.
    ///
    /// This is a generic database error that wraps errors from any database
    /// backend. Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// A record violated a uniqueness constraint.
    #[error("{0} already exists")]
    Conflict(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Permission denied error.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Session storage error.
    #[error("session error: {0}")]
    Session(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Unique violations keep their own variant so callers can map them to a
// domain conflict instead of a generic failure.
impl From<sqlx::Error> for RecuerdosError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RecuerdosError::Conflict("record".to_string())
            }
            _ => RecuerdosError::Database(e.to_string()),
        }
    }
}

/// Result type alias for recuerdos operations.
pub type Result<T> = std::result::Result<T, RecuerdosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = RecuerdosError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn test_conflict_error_display() {
        let err = RecuerdosError::Conflict("email".to_string());
        assert_eq!(err.to_string(), "email already exists");
    }

    #[test]
    fn test_permission_error_display() {
        let err = RecuerdosError::Permission("not the owner".to_string());
        assert_eq!(err.to_string(), "permission denied: not the owner");
    }

    #[test]
    fn test_validation_error_display() {
        let err = RecuerdosError::Validation("caption is required".to_string());
        assert_eq!(err.to_string(), "validation error: caption is required");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = RecuerdosError::NotFound("photo".to_string());
        assert_eq!(err.to_string(), "photo not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RecuerdosError = io_err.into();
        assert!(matches!(err, RecuerdosError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(RecuerdosError::Session("test".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
