//! Quote-tag associations
//!
//! The `quote_tag` join table. Rows are identified by the `(quote_id, tag_id)`
//! pair and disappear with either side.

/// Association database operations
pub mod db;

/// Admin handlers
pub mod handlers;
