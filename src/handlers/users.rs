// handlers/users.rs - /api/users handlers
use axum::response::Json;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::auth::{self, Claims};
use crate::database::manager::DatabaseManager;
use crate::database::models::{NewUser, User};
use crate::database::UserRepository;
use crate::error::ApiError;
use crate::validation::{self, LoginInput, RegisterInput};

/// POST /api/users/register - create an account.
///
/// The stored avatar defaults to a Gravatar URL derived from the email when
/// the payload does not carry one. The response is the created user; the
/// password hash is skipped by the model's serialization.
pub async fn register(payload: Option<Json<RegisterInput>>) -> Result<Json<User>, ApiError> {
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    validation::register::validate(&input).map_err(ApiError::validation_error)?;

    let email = input.email.trim().to_lowercase();

    let pool = DatabaseManager::pool().await?;
    let repository = UserRepository::new(pool);

    if repository.find_by_email(&email).await?.is_some() {
        return Err(ApiError::validation_error(field_error(
            "email",
            "Email already exists",
        )));
    }

    let password_hash = auth::hash_password(&input.password)?;
    let avatar = auth::default_avatar_url(&email);

    let user = repository
        .insert(NewUser {
            name: input.name.trim().to_string(),
            email,
            password_hash,
            avatar: Some(avatar),
        })
        .await?;

    Ok(Json(user))
}

/// POST /api/users/login - verify credentials and issue a bearer token.
///
/// An unknown email and a wrong password are distinct 400 field errors,
/// matching the original API's wire contract.
pub async fn login(payload: Option<Json<LoginInput>>) -> Result<Json<Value>, ApiError> {
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    validation::login::validate(&input).map_err(ApiError::validation_error)?;

    let email = input.email.trim().to_lowercase();

    let pool = DatabaseManager::pool().await?;
    let user = UserRepository::new(pool)
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::validation_error(field_error("email", "User not found")))?;

    if !auth::verify_password(&input.password, &user.password_hash)? {
        return Err(ApiError::validation_error(field_error(
            "password",
            "Password incorrect",
        )));
    }

    let claims = Claims::new(user.id, user.name, user.avatar);
    let token = auth::generate_jwt(claims)?;

    Ok(Json(json!({
        "success": true,
        "token": format!("Bearer {}", token)
    })))
}

fn field_error(field: &str, message: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    errors.insert(field.to_string(), message.to_string());
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_builds_single_entry_map() {
        let errors = field_error("email", "User not found");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email").unwrap(), "User not found");
    }

    #[test]
    fn duplicate_email_body_matches_wire_shape() {
        let err = ApiError::validation_error(field_error("email", "Email already exists"));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_json(), json!({ "email": "Email already exists" }));
    }
}
