pub mod login;
pub mod post;
pub mod register;

pub use login::LoginInput;
pub use post::PostInput;
pub use register::RegisterInput;

use std::collections::HashMap;
use validator::ValidationErrors;

/// Flatten derive-produced errors into a field -> message map.
///
/// Only the first message per field is kept; required-field checks run
/// after this and overwrite format errors for empty inputs.
pub(crate) fn collect_field_errors(result: Result<(), ValidationErrors>) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if let Err(validation) = result {
        for (field, field_errors) in validation.field_errors() {
            if let Some(message) = field_errors.iter().find_map(|e| e.message.as_ref()) {
                errors.insert(field.to_string(), message.to_string());
            }
        }
    }
    errors
}
