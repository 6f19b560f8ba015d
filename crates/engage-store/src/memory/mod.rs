//! In-memory engagement store
//!
//! Implements every repository port with the same observable behavior as the
//! PostgreSQL store: uniqueness violations come back as DuplicateKey, and the
//! fault-injection switches reproduce the Network and RelationMissing
//! failure modes the engines must degrade through. Used by the integration
//! tests and local development.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use uuid::Uuid;

use engage_core::{
    AuthorProfile, BinaryEngagement, Comment, CommentId, CommentLike, CommentLikeRepository,
    CommentRepository, CommentSort, ContentId, EngageError, EngagementKind, EngagementRepository,
    ProfileRepository, Reaction, ReactionKind, ReactionRepository, StoreResult, UserId,
};

/// DashMap-backed store implementing all repository ports
#[derive(Default)]
pub struct MemoryStore {
    reactions: DashMap<(Uuid, Uuid, ReactionKind), Reaction>,
    engagements: DashMap<(Uuid, Uuid, EngagementKind), BinaryEngagement>,
    comments: DashMap<Uuid, Comment>,
    comment_likes: DashMap<(Uuid, Uuid), CommentLike>,
    profiles: DashMap<Uuid, AuthorProfile>,
    offline: AtomicBool,
    missing_tables: RwLock<HashSet<String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Fault injection ===

    /// Make every operation fail with a Network error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Make operations on a table fail with RelationMissing
    pub fn drop_table(&self, table: &str) {
        self.missing_tables.write().insert(table.to_string());
    }

    /// Undo a `drop_table`
    pub fn restore_table(&self, table: &str) {
        self.missing_tables.write().remove(table);
    }

    // === Seeding ===

    /// Insert an author profile directly
    pub fn seed_profile(&self, profile: AuthorProfile) {
        self.profiles.insert(profile.user_id.into_inner(), profile);
    }

    // === Raw row inspection (for invariant assertions in tests) ===

    /// All reaction rows currently stored for a content item
    pub fn reaction_rows(&self, content_id: ContentId) -> Vec<Reaction> {
        self.reactions
            .iter()
            .filter(|entry| entry.content_id == content_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Number of rows in an engagement table for one content item
    pub fn engagement_rows(&self, content_id: ContentId, kind: EngagementKind) -> usize {
        self.engagements
            .iter()
            .filter(|entry| entry.content_id == content_id && entry.kind == kind)
            .count()
    }

    /// Number of stored comments for a content item
    pub fn comment_rows(&self, content_id: ContentId) -> usize {
        self.comments
            .iter()
            .filter(|entry| entry.content_id == content_id)
            .count()
    }

    fn check(&self, table: &str) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(EngageError::Network("store offline (injected)".to_string()));
        }
        if self.missing_tables.read().contains(table) {
            return Err(EngageError::RelationMissing(table.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find(&self, content_id: ContentId, user_id: UserId) -> StoreResult<Option<Reaction>> {
        self.check("reactions")?;
        let found = self
            .reactions
            .iter()
            .filter(|entry| entry.content_id == content_id && entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .min_by_key(|reaction| reaction.created_at);
        Ok(found)
    }

    async fn find_by_content(&self, content_id: ContentId) -> StoreResult<Vec<Reaction>> {
        self.check("reactions")?;
        let mut rows = self.reaction_rows(content_id);
        rows.sort_by_key(|reaction| reaction.created_at);
        Ok(rows)
    }

    async fn count_by_kind(&self, content_id: ContentId) -> StoreResult<Vec<(ReactionKind, i64)>> {
        self.check("reactions")?;
        let mut counts = Vec::new();
        for kind in ReactionKind::ALL {
            let count = self
                .reactions
                .iter()
                .filter(|entry| entry.content_id == content_id && entry.kind == kind)
                .count() as i64;
            if count > 0 {
                counts.push((kind, count));
            }
        }
        Ok(counts)
    }

    async fn create(&self, reaction: &Reaction) -> StoreResult<()> {
        self.check("reactions")?;
        let key = (
            reaction.content_id.into_inner(),
            reaction.user_id.into_inner(),
            reaction.kind,
        );
        if self.reactions.contains_key(&key) {
            return Err(EngageError::DuplicateKey);
        }
        self.reactions.insert(key, reaction.clone());
        Ok(())
    }

    async fn delete(&self, content_id: ContentId, user_id: UserId) -> StoreResult<()> {
        self.check("reactions")?;
        self.reactions.retain(|_, reaction| {
            !(reaction.content_id == content_id && reaction.user_id == user_id)
        });
        Ok(())
    }
}

#[async_trait]
impl EngagementRepository for MemoryStore {
    async fn exists(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<bool> {
        self.check(kind.table())?;
        let key = (content_id.into_inner(), user_id.into_inner(), kind);
        Ok(self.engagements.contains_key(&key))
    }

    async fn create(&self, engagement: &BinaryEngagement) -> StoreResult<()> {
        self.check(engagement.kind.table())?;
        let key = (
            engagement.content_id.into_inner(),
            engagement.user_id.into_inner(),
            engagement.kind,
        );
        if self.engagements.contains_key(&key) {
            return Err(EngageError::DuplicateKey);
        }
        self.engagements.insert(key, engagement.clone());
        Ok(())
    }

    async fn delete(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<()> {
        self.check(kind.table())?;
        let key = (content_id.into_inner(), user_id.into_inner(), kind);
        self.engagements.remove(&key);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> StoreResult<Option<Comment>> {
        self.check("comments")?;
        Ok(self.comments.get(&id.into_inner()).map(|entry| entry.clone()))
    }

    async fn find_by_content(
        &self,
        content_id: ContentId,
        sort: CommentSort,
    ) -> StoreResult<Vec<Comment>> {
        self.check("comments")?;
        let mut rows: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.content_id == content_id)
            .map(|entry| entry.value().clone())
            .collect();
        match sort {
            CommentSort::Recency => {
                rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            }
            CommentSort::Popularity => {
                rows.sort_by(|a, b| {
                    b.like_count
                        .cmp(&a.like_count)
                        .then(b.created_at.cmp(&a.created_at))
                });
            }
        }
        Ok(rows)
    }

    async fn create(&self, comment: &Comment) -> StoreResult<()> {
        self.check("comments")?;
        let key = comment.id.into_inner();
        if self.comments.contains_key(&key) {
            return Err(EngageError::DuplicateKey);
        }
        self.comments.insert(key, comment.clone());
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> StoreResult<()> {
        self.check("comments")?;
        self.comments.remove(&id.into_inner());
        Ok(())
    }

    async fn set_like_count(&self, id: CommentId, like_count: i64) -> StoreResult<()> {
        self.check("comments")?;
        if let Some(mut entry) = self.comments.get_mut(&id.into_inner()) {
            entry.like_count = like_count.max(0);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentLikeRepository for MemoryStore {
    async fn exists(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<bool> {
        self.check("comment_likes")?;
        let key = (comment_id.into_inner(), user_id.into_inner());
        Ok(self.comment_likes.contains_key(&key))
    }

    async fn create(&self, like: &CommentLike) -> StoreResult<()> {
        self.check("comment_likes")?;
        let key = (like.comment_id.into_inner(), like.user_id.into_inner());
        if self.comment_likes.contains_key(&key) {
            return Err(EngageError::DuplicateKey);
        }
        self.comment_likes.insert(key, like.clone());
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<()> {
        self.check("comment_likes")?;
        self.comment_likes
            .remove(&(comment_id.into_inner(), user_id.into_inner()));
        Ok(())
    }

    async fn liked_by_user(
        &self,
        user_id: UserId,
        comment_ids: &[CommentId],
    ) -> StoreResult<Vec<CommentId>> {
        self.check("comment_likes")?;
        Ok(comment_ids
            .iter()
            .copied()
            .filter(|id| {
                self.comment_likes
                    .contains_key(&(id.into_inner(), user_id.into_inner()))
            })
            .collect())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> StoreResult<Option<AuthorProfile>> {
        self.check("profiles")?;
        Ok(self
            .profiles
            .get(&user_id.into_inner())
            .map(|entry| entry.clone()))
    }
}
