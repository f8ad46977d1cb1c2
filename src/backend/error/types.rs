/**
 * Backend Error Types
 *
 * # Status Code Mapping
 *
 * - `HandlerError` - the status it was built with
 * - `NotFound` - 404
 * - `Data` - by kind: 404 not found, 409 constraint violation,
 *   503 connection failure, 500 otherwise
 * - `Session` - 401
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::SessionError;
use crate::backend::db::{DataError, DataErrorKind};

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request-level failure with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        status: StatusCode,
        message: String,
    },

    /// The addressed entity does not exist
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// A data access call failed outside the flash path
    #[error(transparent)]
    Data(#[from] DataError),

    /// The session token was rejected
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl BackendError {
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// e.g. `BackendError::not_found("quote 7")`
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Data(err) if err.is_constraint_violation() => StatusCode::CONFLICT,
            Self::Data(err) => match err.kind {
                DataErrorKind::NotFound => StatusCode::NOT_FOUND,
                DataErrorKind::Connection => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Session(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Message shown to the client
    ///
    /// Server-side failures are reported generically; the detail goes to
    /// the log.
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return "Internal error".to_string();
        }
        self.to_string()
    }
}
