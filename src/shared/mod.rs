//! Shared Module
//!
//! Types that do not depend on the HTTP server: database records, form
//! definitions with their validation rules, configuration, and the error
//! types those produce.

/// Quote, tag and association records
pub mod models;

/// Typed forms and validation
pub mod forms;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{capitalize, CombinedRow, Quote, QuoteTag, TableColumns, Tag};
pub use error::SharedError;
pub use config::{AdminSeed, AppConfig, AppConfigBuilder, ConfigError};
