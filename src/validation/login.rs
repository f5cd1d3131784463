use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use super::collect_field_errors;

/// Login request body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginInput {
    #[serde(default)]
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub fn validate(input: &LoginInput) -> Result<(), HashMap<String, String>> {
    let mut errors = collect_field_errors(input.validate());

    if input.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email field is required".to_string());
    }
    if input.password.is_empty() {
        errors.insert("password".to_string(), "Password field is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
