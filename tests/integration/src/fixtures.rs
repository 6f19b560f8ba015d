//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};

use engage_core::{AuthorProfile, Comment, CommentRepository, ContentId, UserId};
use engage_store::MemoryStore;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A profile with a unique display name
pub fn unique_profile() -> AuthorProfile {
    AuthorProfile::new(UserId::generate(), format!("reader{}", unique_suffix()))
}

/// A comment body exactly at the length limit
pub fn body_at_limit() -> String {
    "x".repeat(engage_core::MAX_COMMENT_LEN)
}

/// A comment body one character over the limit
pub fn body_over_limit() -> String {
    "x".repeat(engage_core::MAX_COMMENT_LEN + 1)
}

/// Insert a comment row directly, bypassing the engine
///
/// Used to stage listings without going through validation or notices.
pub async fn seed_comment(
    store: &MemoryStore,
    content_id: ContentId,
    author_id: UserId,
    body: &str,
) -> Comment {
    let comment = Comment::new(content_id, author_id, body.to_string());
    CommentRepository::create(store, &comment)
        .await
        .expect("seed comment");
    comment
}
