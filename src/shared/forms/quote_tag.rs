//! Quote-tag association form

use serde::{Deserialize, Serialize};

use super::{required_integer, FormErrors};

/// Raw association payload
///
/// Ids arrive as text so that a malformed number becomes a field error.
/// `quote_body` and `tag_name` are display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteTagForm {
    pub quote_id: String,
    pub tag_id: String,
    pub quote_body: Option<String>,
    pub tag_name: Option<String>,
    #[serde(skip_serializing)]
    pub quotetag_submit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidQuoteTag {
    pub quote_id: i64,
    pub tag_id: i64,
}

impl QuoteTagForm {
    pub fn populated(quote_id: i64, tag_id: i64, quote_body: &str, tag_name: &str) -> Self {
        Self {
            quote_id: quote_id.to_string(),
            tag_id: tag_id.to_string(),
            quote_body: Some(quote_body.to_string()),
            tag_name: Some(tag_name.to_string()),
            quotetag_submit: None,
        }
    }

    pub fn validate(&self) -> Result<ValidQuoteTag, FormErrors> {
        let mut errors = FormErrors::new();
        let quote_id = required_integer(&mut errors, "quote_id", &self.quote_id);
        let tag_id = required_integer(&mut errors, "tag_id", &self.tag_id);
        errors.finish(|| ValidQuoteTag { quote_id, tag_id })
    }
}
