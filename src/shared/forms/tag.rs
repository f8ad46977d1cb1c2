//! Tag create/update form

use serde::{Deserialize, Serialize};

use super::{required_text, FormAction, FormErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagForm {
    #[serde(skip_deserializing)]
    pub tag_id: Option<i64>,
    pub tag_name: String,
    #[serde(skip_serializing)]
    pub tag_submit: Option<String>,
    #[serde(skip_serializing)]
    pub tag_delete: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTag {
    pub name: String,
    pub action: FormAction,
}

impl TagForm {
    pub fn populated(id: i64, name: &str) -> Self {
        Self {
            tag_id: Some(id),
            tag_name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ValidTag, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required_text(&mut errors, "tag_name", &self.tag_name);
        let action = FormAction::from_buttons(&self.tag_submit, &self.tag_delete);
        errors.finish(|| ValidTag { name, action })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_required() {
        let form = TagForm {
            tag_name: " ".to_string(),
            tag_submit: Some("Submit".to_string()),
            ..TagForm::default()
        };
        assert!(form.validate().unwrap_err().get("tag_name").is_some());
    }

    #[test]
    fn test_name_passed_through_uncapitalized() {
        // Capitalization is applied by the data access layer.
        let form = TagForm {
            tag_name: "stoic".to_string(),
            tag_delete: Some("Delete".to_string()),
            ..TagForm::default()
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.name, "stoic");
        assert_eq!(valid.action, FormAction::Delete);
    }
}
