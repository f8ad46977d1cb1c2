//! Shared Error Types
//!
//! Errors that are not tied to HTTP or the database. Form validation has its
//! own collector (`shared::forms::FormErrors`); what remains here is payload
//! encoding, which the flash cookie layer relies on.
//!
//! # Usage
//!
//! ```rust
//! use quoteshufl::shared::error::SharedError;
//!
//! let error: SharedError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
//! assert!(error.to_string().starts_with("Serialization error"));
//! ```
use thiserror::Error;

/// Shared error types used by payload encoding
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
