//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use engage_core::{AuthorProfile, ProfileRepository, StoreResult, UserId};

use crate::models::ProfileModel;

use super::error::map_store_error;

const TABLE: &str = "profiles";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: UserId) -> StoreResult<Option<AuthorProfile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r#"
            SELECT user_id, display_name, avatar_url
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(result.map(AuthorProfile::from))
    }
}
