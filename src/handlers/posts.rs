// handlers/posts.rs - /api/posts handlers
use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::{NewPost, Post};
use crate::database::{PostRepository, ProfileRepository};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validation::{post, PostInput};

const NO_POST_WITH_ID: &str = "No post found with that ID";

/// GET /api/posts/test - route liveness probe
pub async fn test() -> Json<Value> {
    Json(json!({ "msg": "Posts works" }))
}

/// GET /api/posts - all posts, newest first
pub async fn list() -> Result<Json<Vec<Post>>, ApiError> {
    let pool = DatabaseManager::pool().await?;
    let posts = PostRepository::new(pool).list_desc().await?;
    Ok(Json(posts))
}

/// GET /api/posts/:id - single post by id.
///
/// A malformed id is indistinguishable from a miss on the wire; both come
/// back as the legacy 404 body, and malformed ids never reach the store.
pub async fn get(Path(id): Path<String>) -> Result<Json<Post>, ApiError> {
    let post_id = parse_post_id(&id)?;

    let pool = DatabaseManager::pool().await?;
    let post = PostRepository::new(pool)
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::post_not_found(NO_POST_WITH_ID))?;

    Ok(Json(post))
}

/// POST /api/posts - create a post as the authenticated user.
///
/// The owner always comes from verified claims; a missing body falls
/// through to validation and surfaces as field errors.
pub async fn create(
    Extension(user): Extension<AuthUser>,
    payload: Option<Json<PostInput>>,
) -> Result<Json<Post>, ApiError> {
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    post::validate(&input).map_err(ApiError::validation_error)?;

    let new_post = NewPost {
        user_id: user.user_id,
        text: input.text,
        name: input.name,
        avatar: input.avatar,
    };

    let pool = DatabaseManager::pool().await?;
    let created = PostRepository::new(pool).insert(new_post).await?;

    Ok(Json(created))
}

/// DELETE /api/posts/:id - delete an owned post.
///
/// Looks up the caller's profile first, then checks ownership before
/// touching the row. A vanished profile is tolerated; only the ownership
/// check gates the delete.
pub async fn delete(
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let post_id = parse_post_id(&id)?;

    let pool = DatabaseManager::pool().await?;

    let profile = ProfileRepository::new(pool.clone())
        .find_by_user(user.user_id)
        .await?;
    if profile.is_none() {
        tracing::warn!(user_id = %user.user_id, "Delete requested by user without a profile");
    }

    let repository = PostRepository::new(pool);
    let post = repository
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| ApiError::post_not_found(NO_POST_WITH_ID))?;

    if post.user_id != user.user_id {
        return Err(ApiError::NotAuthorized);
    }

    // Owner-qualified delete; a concurrent removal reads as a miss
    let deleted = repository.delete_owned(post_id, user.user_id).await?;
    if !deleted {
        return Err(ApiError::post_not_found(NO_POST_WITH_ID));
    }

    Ok(Json(json!({ "deleted": "succes" })))
}

fn parse_post_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::post_not_found(NO_POST_WITH_ID))
}
