//! Quotes
//!
//! CRUD over the `quote` table and the random pick shown on the home page.

/// Quote database operations
pub mod db;

/// Admin handlers
pub mod handlers;
