use serde::Deserialize;
use std::collections::HashMap;
use validator::Validate;

use super::collect_field_errors;

/// Create-post request body.
///
/// Every field defaults so a missing body still reaches validation and
/// comes back as field errors rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostInput {
    #[serde(default)]
    #[validate(length(max = 300, message = "Post must not exceed 300 characters"))]
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

pub fn validate(input: &PostInput) -> Result<(), HashMap<String, String>> {
    let mut errors = collect_field_errors(input.validate());

    if input.text.trim().is_empty() {
        errors.insert("text".to_string(), "Text field is required".to_string());
    }
    if input.name.trim().is_empty() {
        errors.insert("name".to_string(), "Name field is required".to_string());
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

    #[test]
    fn test_valid_post_passes() {
        let input = PostInput {
            text: "hello".to_string(),
            name: "Jane Doe".to_string(),
            avatar: None,
        };
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn test_empty_body_reports_required_fields() {
        let input = PostInput::default();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("text").unwrap(), "Text field is required");
        assert_eq!(errors.get("name").unwrap(), "Name field is required");
    }

    #[test]
    fn test_whitespace_text_is_required_error() {
        let input = PostInput {
            text: "   ".to_string(),
            name: "Jane Doe".to_string(),
            avatar: None,
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.get("text").unwrap(), "Text field is required");
    }

    #[test]
    fn test_overlong_text_rejected() {
        let input = PostInput {
            text: "x".repeat(301),
            name: "Jane Doe".to_string(),
            avatar: None,
        };
        let errors = validate(&input).unwrap_err();
        assert_eq!(
            errors.get("text").unwrap(),
            "Post must not exceed 300 characters"
        );
    }

    #[test]
    fn test_max_length_text_accepted() {
        let input = PostInput {
            text: "x".repeat(300),
            name: "Jane Doe".to_string(),
            avatar: Some("https://example.com/a.png".to_string()),
        };
        assert!(validate(&input).is_ok());
    }
}
