/**
 * Data Access Errors
 *
 * `DataError` is the failure half of every data access result. It keeps the
 * driver's message for display and classifies the failure so callers can
 * tell a constraint violation from a lost connection.
 */

use serde::Serialize;
use thiserror::Error;

/// Result type returned by every data access operation
pub type DataResult<T> = Result<T, DataError>;

/// Classification of a data access failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataErrorKind {
    /// The addressed row does not exist
    NotFound,
    /// A unique or primary key constraint rejected the write
    UniqueViolation,
    /// A referenced row is missing
    ForeignKeyViolation,
    /// A required column was null
    NotNullViolation,
    /// The pool or the connection to the server failed
    Connection,
    /// Anything else the driver reported
    Other,
}

/// A failed data access operation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct DataError {
    pub kind: DataErrorKind,
    pub message: String,
}

impl DataError {
    pub fn new(kind: DataErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A missing row, described by table and key
    pub fn not_found(table: &str, key: impl std::fmt::Display) -> Self {
        Self::new(DataErrorKind::NotFound, format!("no {} row with key {}", table, key))
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(DataErrorKind::Other, message)
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self.kind,
            DataErrorKind::UniqueViolation
                | DataErrorKind::ForeignKeyViolation
                | DataErrorKind::NotNullViolation
        )
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::RowNotFound => DataErrorKind::NotFound,
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation => DataErrorKind::UniqueViolation,
                sqlx::error::ErrorKind::ForeignKeyViolation => DataErrorKind::ForeignKeyViolation,
                sqlx::error::ErrorKind::NotNullViolation => DataErrorKind::NotNullViolation,
                _ => DataErrorKind::Other,
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DataErrorKind::Connection,
            _ => DataErrorKind::Other,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<bcrypt::BcryptError> for DataError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::other(format!("password hashing failed: {}", err))
    }
}
