//! PostgreSQL implementation of EngagementRepository
//!
//! Likes and bookmarks live in separate tables with identical shape; the
//! kind selects the table. Table names cannot be bound as parameters, so
//! each operation matches on the kind and runs a table-specific query.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use engage_core::{
    BinaryEngagement, ContentId, EngagementKind, EngagementRepository, StoreResult, UserId,
};

use super::error::map_store_error;

/// PostgreSQL implementation of EngagementRepository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    /// Create a new PgEngagementRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self))]
    async fn exists(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<bool> {
        let sql = match kind {
            EngagementKind::Like => {
                "SELECT EXISTS(SELECT 1 FROM likes WHERE content_id = $1 AND user_id = $2)"
            }
            EngagementKind::Bookmark => {
                "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE content_id = $1 AND user_id = $2)"
            }
        };

        let exists = sqlx::query_scalar::<_, bool>(sql)
            .bind(content_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_store_error(e, kind.table()))?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, engagement: &BinaryEngagement) -> StoreResult<()> {
        let sql = match engagement.kind {
            EngagementKind::Like => {
                "INSERT INTO likes (content_id, user_id, created_at) VALUES ($1, $2, $3)"
            }
            EngagementKind::Bookmark => {
                "INSERT INTO bookmarks (content_id, user_id, created_at) VALUES ($1, $2, $3)"
            }
        };

        sqlx::query(sql)
            .bind(engagement.content_id.into_inner())
            .bind(engagement.user_id.into_inner())
            .bind(engagement.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_store_error(e, engagement.kind.table()))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<()> {
        let sql = match kind {
            EngagementKind::Like => "DELETE FROM likes WHERE content_id = $1 AND user_id = $2",
            EngagementKind::Bookmark => {
                "DELETE FROM bookmarks WHERE content_id = $1 AND user_id = $2"
            }
        };

        sqlx::query(sql)
            .bind(content_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_store_error(e, kind.table()))?;

        Ok(())
    }
}
