use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use super::collect_field_errors;

/// Registration request body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(default)]
    #[validate(length(min = 2, max = 30, message = "Name must be between 2 and 30 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
    #[serde(default)]
    pub password2: String,
}

pub fn validate(input: &RegisterInput) -> Result<(), HashMap<String, String>> {
    let mut errors = collect_field_errors(input.validate());

    if input.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name field is required".to_string());
    }
    if input.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email field is required".to_string());
    }
    if input.password.is_empty() {
        errors.insert("password".to_string(), "Password field is required".to_string());
    }
    if input.password2.is_empty() {
        errors.insert(
            "password2".to_string(),
            "Confirm password field is required".to_string(),
        );
    } else if input.password != input.password2 {
        errors.insert("password2".to_string(), "Passwords must match".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> RegisterInput {
        RegisterInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            password2: "secret1".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate(&valid_input()).is_ok());
    }

    #[test]
    fn test_empty_body_reports_all_required_fields() {
        let errors = validate(&RegisterInput::default()).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), "Name field is required");
        assert_eq!(errors.get("email").unwrap(), "Email field is required");
        assert_eq!(errors.get("password").unwrap(), "Password field is required");
        assert_eq!(
            errors.get("password2").unwrap(),
            "Confirm password field is required"
        );
    }

    #[test]
    fn test_short_name_rejected() {
        let mut input = valid_input();
        input.name = "J".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get("name").unwrap(),
            "Name must be between 2 and 30 characters"
        );
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut input = valid_input();
        input.email = "not-an-email".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("email").unwrap(), "Email is invalid");
    }

    #[test]
    fn test_short_password_rejected() {
        let mut input = valid_input();
        input.password = "abc".to_string();
        input.password2 = "abc".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get("password").unwrap(),
            "Password must be between 6 and 30 characters"
        );
    }

    #[test]
    fn test_mismatched_passwords_rejected() {
        let mut input = valid_input();
        input.password2 = "different1".to_string();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("password2").unwrap(), "Passwords must match");
    }
}
