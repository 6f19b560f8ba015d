//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use engage_core::{
    ContentId, Reaction, ReactionKind, ReactionRepository, StoreResult, UserId,
};

use crate::models::{ReactionCountModel, ReactionModel};

use super::error::map_store_error;

const TABLE: &str = "reactions";

/// PostgreSQL implementation of ReactionRepository
///
/// The table carries no uniqueness constraint on (content_id, user_id); the
/// one-reaction-per-user invariant is the reaction engine's responsibility.
/// The primary key is (content_id, user_id, kind), so re-inserting the same
/// choice surfaces as DuplicateKey.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, content_id: ContentId, user_id: UserId) -> StoreResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT content_id, user_id, kind, created_at
            FROM reactions
            WHERE content_id = $1 AND user_id = $2
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(content_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_content(&self, content_id: ContentId) -> StoreResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT content_id, user_id, kind, created_at
            FROM reactions
            WHERE content_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(content_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        results.into_iter().map(Reaction::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_kind(&self, content_id: ContentId) -> StoreResult<Vec<(ReactionKind, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT kind, COUNT(*) as count
            FROM reactions
            WHERE content_id = $1
            GROUP BY kind
            ORDER BY count DESC
            "#,
        )
        .bind(content_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        let mut counts = Vec::with_capacity(results.len());
        for row in results {
            let kind: ReactionKind = row
                .kind
                .parse()
                .map_err(|_| engage_core::EngageError::Store(format!("Unknown reaction kind: {}", row.kind)))?;
            counts.push((kind, row.count));
        }
        Ok(counts)
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (content_id, user_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reaction.content_id.into_inner())
        .bind(reaction.user_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, content_id: ContentId, user_id: UserId) -> StoreResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions WHERE content_id = $1 AND user_id = $2
            "#,
        )
        .bind(content_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_store_error(e, TABLE))?;

        Ok(())
    }
}
