use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A short text record authored by a user.
///
/// Serialized with the wire names the original API shipped: the owner is
/// `user` and the creation timestamp is `date`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

/// Insert payload for a post; `user_id` always comes from verified claims
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: Option<String>,
}
