//! Public tag picker form

use serde::{Deserialize, Serialize};

use super::{FormErrors, NOT_A_CHOICE};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSelectForm {
    pub tag_select: String,
    #[serde(skip_serializing)]
    pub tag_submit: Option<String>,
}

impl TagSelectForm {
    /// Accepts only one of the offered tag names
    pub fn validate(&self, choices: &[String]) -> Result<String, FormErrors> {
        let mut errors = FormErrors::new();
        if !choices.iter().any(|choice| choice == &self.tag_select) {
            errors.add("tag_select", NOT_A_CHOICE);
        }
        errors.finish(|| self.tag_select.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_must_be_offered() {
        let choices = vec!["Stoic".to_string(), "Humor".to_string()];
        let ok = TagSelectForm {
            tag_select: "Humor".to_string(),
            tag_submit: Some("Submit".to_string()),
        };
        assert_eq!(ok.validate(&choices).unwrap(), "Humor");

        let bad = TagSelectForm {
            tag_select: "humor".to_string(),
            tag_submit: None,
        };
        assert!(bad.validate(&choices).unwrap_err().get("tag_select").is_some());
    }

    #[test]
    fn test_no_choices_rejects_everything() {
        assert!(TagSelectForm::default().validate(&[]).is_err());
    }
}
