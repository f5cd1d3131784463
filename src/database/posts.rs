use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::{NewPost, Post};

/// Data access for the posts table
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All posts, newest first
    pub async fn list_desc(&self) -> Result<Vec<Post>, DatabaseError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, text, name, avatar, date FROM posts ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, text, name, avatar, date FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    pub async fn insert(&self, new_post: NewPost) -> Result<Post, DatabaseError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (id, user_id, text, name, avatar, date) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, user_id, text, name, avatar, date",
        )
        .bind(Uuid::new_v4())
        .bind(new_post.user_id)
        .bind(&new_post.text)
        .bind(&new_post.name)
        .bind(&new_post.avatar)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post only if `owner` authored it; returns whether a row went away
    pub async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
