//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use engage_core::{Comment, CommentId, CommentRepository, CommentSort, ContentId, StoreResult};

use crate::models::CommentModel;

use super::error::map_store_error;

const TABLE: &str = "comments";

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CommentId) -> StoreResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, content_id, author_id, content, like_count, created_at, updated_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_content(
        &self,
        content_id: ContentId,
        sort: CommentSort,
    ) -> StoreResult<Vec<Comment>> {
        // Sort column cannot be a bind parameter; one query per order.
        let sql = match sort {
            CommentSort::Recency => {
                r#"
                SELECT id, content_id, author_id, content, like_count, created_at, updated_at
                FROM comments
                WHERE content_id = $1
                ORDER BY created_at DESC
                "#
            }
            CommentSort::Popularity => {
                r#"
                SELECT id, content_id, author_id, content, like_count, created_at, updated_at
                FROM comments
                WHERE content_id = $1
                ORDER BY like_count DESC, created_at DESC
                "#
            }
        };

        let results = sqlx::query_as::<_, CommentModel>(sql)
            .bind(content_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_store_error(e, TABLE))?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &Comment) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, content_id, author_id, content, like_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.content_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.like_count)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: CommentId) -> StoreResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_like_count(&self, id: CommentId, like_count: i64) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE comments SET like_count = $2, updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(like_count.max(0))
        .execute(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }
}
