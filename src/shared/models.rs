//! Quote database records
//!
//! Row types for the four tables and the denormalized combined view. These
//! are the values the data access layer returns and the views serialize.

use serde::{Deserialize, Serialize};

/// A stored quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: i64,
    pub body: String,
    pub source: String,
}

/// A tag; `name` is always stored capitalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Association between a quote and a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuoteTag {
    pub quote_id: i64,
    pub tag_id: i64,
}

/// One row of the quote/tag join used by the public and admin listings
///
/// `tag` is `None` for deduplicated listings, where a quote appears once
/// regardless of how many tags it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CombinedRow {
    pub quote_id: i64,
    pub body: String,
    pub source: String,
    pub tag: Option<String>,
}

/// Ordered column names of a table, used to label admin listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumns {
    pub table: String,
    pub columns: Vec<String>,
}

/// Upper-case the first character and lower-case the rest.
///
/// ```rust
/// use quoteshufl::shared::models::capitalize;
///
/// assert_eq!(capitalize("stoic"), "Stoic");
/// assert_eq!(capitalize("sTOIC"), "Stoic");
/// ```
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
