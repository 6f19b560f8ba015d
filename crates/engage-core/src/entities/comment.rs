//! Comment entity and its per-comment like record

use chrono::{DateTime, Utc};

use crate::error::EngageError;
use crate::value_objects::{CommentId, ContentId, UserId};

/// Maximum comment length in characters, after trimming
pub const MAX_COMMENT_LEN: usize = 1000;

/// Comment entity
///
/// `like_count` is denormalized and only adjusted by the comment-like toggle
/// path; a full listing returns the stored value and is the reconciliation
/// point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content_id: ContentId,
    pub author_id: UserId,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment with already-validated body text
    pub fn new(content_id: ContentId, author_id: UserId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: CommentId::generate(),
            content_id,
            author_id,
            content,
            like_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate raw comment input and return the trimmed body
    ///
    /// Rejects before any store call: empty after trim, or longer than
    /// [`MAX_COMMENT_LEN`] characters.
    pub fn validate_body(raw: &str) -> Result<String, EngageError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EngageError::Validation(
                "Comment must not be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_COMMENT_LEN {
            return Err(EngageError::ContentTooLong {
                max: MAX_COMMENT_LEN,
            });
        }
        Ok(trimmed.to_string())
    }

    /// Check whether a user authored this comment
    #[inline]
    pub fn is_author(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Comment like record - same existence invariant as a binary engagement,
/// scoped to a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLike {
    pub comment_id: CommentId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl CommentLike {
    /// Create a new CommentLike
    pub fn new(comment_id: CommentId, user_id: UserId) -> Self {
        Self {
            comment_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
