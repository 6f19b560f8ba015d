//! Content item entity - the shared target of all engagements

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentId, UserId};

/// Denormalized counters carried by a content item
///
/// These are display-only mirrors maintained outside any transactional
/// guarantee. Decrements floor at zero so a drifted mirror never goes
/// negative on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentCounters {
    pub view_count: i64,
    pub like_count: i64,
    pub comment_count: i64,
}

impl ContentCounters {
    /// Add one like
    pub fn increment_likes(&mut self) {
        self.like_count += 1;
    }

    /// Remove one like, floored at zero
    pub fn decrement_likes(&mut self) {
        self.like_count = (self.like_count - 1).max(0);
    }

    /// Add one comment
    pub fn increment_comments(&mut self) {
        self.comment_count += 1;
    }

    /// Remove one comment, floored at zero
    pub fn decrement_comments(&mut self) {
        self.comment_count = (self.comment_count - 1).max(0);
    }
}

/// Content item entity - a news article or community post
///
/// Created and deleted through the content CRUD surface; the engagement
/// layer only ever mutates the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub id: ContentId,
    pub author_id: Option<UserId>,
    pub counters: ContentCounters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create a new ContentItem with zeroed counters
    pub fn new(id: ContentId, author_id: Option<UserId>) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            counters: ContentCounters::default(),
            created_at: now,
            updated_at: now,
        }
    }
}
