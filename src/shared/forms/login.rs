//! Admin login form

use serde::{Deserialize, Serialize};

use super::{required_text, FormErrors};

/// Login payload; the password is never serialized back into a view
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub login_submit: Option<String>,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ValidLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidLogin")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<ValidLogin, FormErrors> {
        let mut errors = FormErrors::new();
        let username = required_text(&mut errors, "username", &self.username);
        let password = required_text(&mut errors, "password", &self.password);
        errors.finish(|| ValidLogin { username, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.get("username").is_some());
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn test_password_not_serialized_or_logged() {
        let form = LoginForm {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
            login_submit: None,
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!format!("{:?}", form).contains("hunter2"));
    }
}
