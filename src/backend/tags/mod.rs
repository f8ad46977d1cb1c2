//! Tags
//!
//! CRUD over the `tag` table.

/// Tag database operations
pub mod db;

/// Admin handlers
pub mod handlers;
