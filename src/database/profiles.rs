use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseError;
use super::models::Profile;

/// Read-only access to the profiles table
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT id, user_id, handle, created_at FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }
}
