//! Form Layer
//!
//! Typed urlencoded forms and their validation rules. Each form is
//! deserialized leniently (every field defaults to empty) so that missing
//! fields surface as field-level validation errors instead of extractor
//! rejections.
//!
//! # Module Structure
//!
//! ```text
//! forms/
//! ├── mod.rs        - FormErrors, FormAction, shared field rules
//! ├── quote.rs      - QuoteForm
//! ├── tag.rs        - TagForm
//! ├── quote_tag.rs  - QuoteTagForm
//! ├── login.rs      - LoginForm
//! └── tag_select.rs - TagSelectForm (public tag picker)
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

pub mod login;
pub mod quote;
pub mod quote_tag;
pub mod tag;
pub mod tag_select;

pub use login::{LoginForm, ValidLogin};
pub use quote::{QuoteForm, ValidQuote};
pub use quote_tag::{QuoteTagForm, ValidQuoteTag};
pub use tag::{TagForm, ValidTag};
pub use tag_select::TagSelectForm;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer value.";
pub const NOT_A_CHOICE: &str = "Not a valid choice.";

/// Which button submitted a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    Submit,
    Delete,
    /// Neither button was present in the payload
    None,
}

impl FormAction {
    /// A button counts as pressed when its field is present in the payload.
    /// Submit wins if a client sends both.
    pub fn from_buttons(submit: &Option<String>, delete: &Option<String>) -> Self {
        match (submit, delete) {
            (Some(_), _) => FormAction::Submit,
            (None, Some(_)) => FormAction::Delete,
            (None, None) => FormAction::None,
        }
    }
}

/// Field-level validation errors, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// One line per field, in the `field: ["message"]` form the flash layer shows
    pub fn flash_lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(field, messages)| format!("{}: {:?}", field, messages))
            .collect()
    }

    /// `Ok(value)` when no errors were recorded
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Rule for required text fields: rejects empty and whitespace-only input
pub(crate) fn required_text(errors: &mut FormErrors, field: &str, value: &str) -> String {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_string()
}

/// Rule for required integer fields
///
/// Zero is treated as missing, matching the falsy check of the required rule.
pub(crate) fn required_integer(errors: &mut FormErrors, field: &str, value: &str) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, REQUIRED);
        return 0;
    }
    match trimmed.parse::<i64>() {
        Ok(0) => {
            errors.add(field, REQUIRED);
            0
        }
        Ok(number) => number,
        Err(_) => {
            errors.add(field, NOT_AN_INTEGER);
            0
        }
    }
}
