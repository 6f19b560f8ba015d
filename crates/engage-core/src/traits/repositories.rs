//! Repository traits over the engagement store
//!
//! The store offers row create/delete/select with equality filters and no
//! transactions or triggers; every invariant above that is enforced by the
//! engines. All implementations map backend failures into the
//! [`EngageError`] taxonomy.

use async_trait::async_trait;

use crate::entities::{AuthorProfile, BinaryEngagement, Comment, CommentLike, Reaction};
use crate::error::EngageError;
use crate::value_objects::{CommentId, CommentSort, ContentId, EngagementKind, ReactionKind, UserId};

/// Result type for store operations
pub type StoreResult<T> = Result<T, EngageError>;

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the current user's reaction row for a content item, if any
    async fn find(&self, content_id: ContentId, user_id: UserId) -> StoreResult<Option<Reaction>>;

    /// Get all reaction rows for a content item
    async fn find_by_content(&self, content_id: ContentId) -> StoreResult<Vec<Reaction>>;

    /// Count reactions grouped by kind for a content item
    async fn count_by_kind(&self, content_id: ContentId) -> StoreResult<Vec<(ReactionKind, i64)>>;

    /// Insert a reaction row
    async fn create(&self, reaction: &Reaction) -> StoreResult<()>;

    /// Delete the user's reaction row for a content item
    async fn delete(&self, content_id: ContentId, user_id: UserId) -> StoreResult<()>;
}

// ============================================================================
// Binary Engagement Repository (likes, bookmarks)
// ============================================================================

#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Check whether the (content, user, kind) row exists
    async fn exists(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<bool>;

    /// Insert an engagement row
    async fn create(&self, engagement: &BinaryEngagement) -> StoreResult<()>;

    /// Delete the engagement row
    async fn delete(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> StoreResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by id
    async fn find_by_id(&self, id: CommentId) -> StoreResult<Option<Comment>>;

    /// List all comments on a content item in the requested order
    async fn find_by_content(
        &self,
        content_id: ContentId,
        sort: CommentSort,
    ) -> StoreResult<Vec<Comment>>;

    /// Insert a comment row
    async fn create(&self, comment: &Comment) -> StoreResult<()>;

    /// Delete a comment row
    async fn delete(&self, id: CommentId) -> StoreResult<()>;

    /// Persist the denormalized like count for a comment
    async fn set_like_count(&self, id: CommentId, like_count: i64) -> StoreResult<()>;
}

// ============================================================================
// Comment Like Repository
// ============================================================================

#[async_trait]
pub trait CommentLikeRepository: Send + Sync {
    /// Check whether the (comment, user) row exists
    async fn exists(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<bool>;

    /// Insert a comment-like row
    async fn create(&self, like: &CommentLike) -> StoreResult<()>;

    /// Delete the comment-like row
    async fn delete(&self, comment_id: CommentId, user_id: UserId) -> StoreResult<()>;

    /// Of the given comments, which has this user liked
    async fn liked_by_user(
        &self,
        user_id: UserId,
        comment_ids: &[CommentId],
    ) -> StoreResult<Vec<CommentId>>;
}

// ============================================================================
// Author Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find display data for a user
    async fn find_by_id(&self, user_id: UserId) -> StoreResult<Option<AuthorProfile>>;
}
