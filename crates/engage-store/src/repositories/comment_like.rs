//! PostgreSQL implementation of CommentLikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use engage_core::{CommentId, CommentLike, CommentLikeRepository, StoreResult, UserId};

use super::error::map_store_error;

const TABLE: &str = "comment_likes";

/// PostgreSQL implementation of CommentLikeRepository
#[derive(Clone)]
pub struct PgCommentLikeRepository {
    pool: PgPool,
}

impl PgCommentLikeRepository {
    /// Create a new PgCommentLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentLikeRepository for PgCommentLikeRepository {
    #[instrument(skip(self))]
    async fn exists(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(comment_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &CommentLike) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comment_likes (comment_id, user_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(like.comment_id.into_inner())
        .bind(like.user_id.into_inner())
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<()> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2")
            .bind(comment_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn liked_by_user(
        &self,
        user_id: UserId,
        comment_ids: &[CommentId],
    ) -> StoreResult<Vec<CommentId>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw_ids: Vec<Uuid> = comment_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT comment_id
            FROM comment_likes
            WHERE user_id = $1 AND comment_id = ANY($2)
            "#,
        )
        .bind(user_id.into_inner())
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(results.into_iter().map(CommentId::new).collect())
    }
}
