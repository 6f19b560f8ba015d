//! Response DTOs
//!
//! Serializable shapes handed to the presentation layer. Ids are serialized
//! as strings (UUID text form).

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Author display data on a comment
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A comment decorated for display
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorResponse>,
    pub content: String,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub created_at: DateTime<Utc>,
}

/// Reaction counts by kind plus the current user's choice
#[derive(Debug, Clone, Serialize, Default)]
pub struct ReactionSummary {
    pub like: i64,
    pub sad: i64,
    pub angry: i64,
    pub surprised: i64,
    pub anxious: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mine: Option<String>,
}

/// Like/bookmark state plus the local counter mirrors
#[derive(Debug, Clone, Serialize)]
pub struct EngagementResponse {
    pub liked: bool,
    pub bookmarked: bool,
    pub like_count: i64,
    pub comment_count: i64,
}
