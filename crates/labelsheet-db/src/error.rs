//! # Database Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError::Db (pipeline) ← logged, escapes main                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing database file is NOT an error: the loader reports it as
//! [`LoadOutcome::Missing`](crate::LoadOutcome::Missing).

use labelsheet_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The database file exists but could not be opened.
    ///
    /// ## When This Occurs
    /// - File is not a SQLite database
    /// - File permissions issue
    /// - File is locked exclusively by another process
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed.
    ///
    /// ## When This Occurs
    /// - Configured table does not exist
    /// - Table lacks a `serial` or `device_name` column
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Configured table name is not a plain identifier.
    #[error("Invalid table name: {0}")]
    InvalidTable(#[from] ValidationError),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed (SQLite message)
/// sqlx::Error::ColumnNotFound → DbError::QueryFailed
/// sqlx::Error::ColumnDecode   → DbError::QueryFailed
/// sqlx::Error::Io             → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::ColumnNotFound(column) => {
                DbError::QueryFailed(format!("column not found: {column}"))
            }

            err @ sqlx::Error::ColumnDecode { .. } => DbError::QueryFailed(err.to_string()),

            sqlx::Error::Io(io) => DbError::ConnectionFailed(io.to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_maps_to_query_failed() {
        let err: DbError = sqlx::Error::ColumnNotFound("device_name".to_string()).into();
        assert_eq!(err.to_string(), "Query failed: column not found: device_name");
    }

    #[test]
    fn test_io_maps_to_connection_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DbError = sqlx::Error::Io(io).into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }

    #[test]
    fn test_validation_converts() {
        let err: DbError = ValidationError::required("database.table").into();
        assert_eq!(err.to_string(), "Invalid table name: database.table is required");
    }
}
