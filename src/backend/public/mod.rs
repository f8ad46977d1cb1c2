//! Public site
//!
//! The random quote, the joined listings and the tag picker. The joined
//! queries are shared with the admin dashboard.

/// Combined quote/tag queries
pub mod db;

/// Public page handlers
pub mod handlers;
