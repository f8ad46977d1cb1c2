//! Quote create/update form

use serde::{Deserialize, Serialize};

use super::{required_text, FormAction, FormErrors};

/// Raw quote form payload
///
/// `quote_id` is display-only; the id of the row being edited always comes
/// from the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteForm {
    #[serde(skip_deserializing)]
    pub quote_id: Option<i64>,
    pub quote_body: String,
    pub quote_source: String,
    #[serde(skip_serializing)]
    pub quote_submit: Option<String>,
    #[serde(skip_serializing)]
    pub quote_delete: Option<String>,
}

/// A quote form that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidQuote {
    pub body: String,
    pub source: String,
    pub action: FormAction,
}

impl QuoteForm {
    /// Form pre-filled from a stored quote
    pub fn populated(id: i64, body: &str, source: &str) -> Self {
        Self {
            quote_id: Some(id),
            quote_body: body.to_string(),
            quote_source: source.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ValidQuote, FormErrors> {
        let mut errors = FormErrors::new();
        let body = required_text(&mut errors, "quote_body", &self.quote_body);
        let source = required_text(&mut errors, "quote_source", &self.quote_source);
        let action = FormAction::from_buttons(&self.quote_submit, &self.quote_delete);
        errors.finish(|| ValidQuote { body, source, action })
    }
}
