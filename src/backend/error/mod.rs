//! Backend Error Module
//!
//! Errors that end a request with an HTTP error status instead of a flash
//! message and a redirect: a missing entity on a form page, a database
//! failure while loading a listing, a rejected session on an API-style
//! extractor.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, so handlers return it directly.
//! The body is JSON: `{"error": "...", "status": 404}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
