//! Engagement layer integration tests
//!
//! Every scenario drives the real engines against the in-memory store,
//! asserting on the engine view, the raw row set, and the notices produced.
//!
//! Run with: cargo test -p integration-tests --test engagement_tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use engage_core::{
    BinaryEngagement, BinaryState, CommentId, CommentSort, ContentCounters, ContentId,
    EngageError, EngagementKind, EngagementRepository, NoticeKind, Reaction, ReactionKind,
    ReactionRepository, UserId,
};
use engage_service::dto::CreateCommentRequest;
use engage_service::PanelState;
use engage_store::MemoryStore;
use integration_tests::{body_at_limit, body_over_limit, seed_comment, TestHarness};

// ============================================================================
// Reactions: one-of-five exclusivity
// ============================================================================

#[tokio::test]
async fn test_reaction_set_then_switch_keeps_single_row() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.reaction_engine(content_id);

    let view = engine.apply(ReactionKind::Like).await.unwrap();
    assert_eq!(view.mine, Some(ReactionKind::Like));
    assert_eq!(view.tally.count(ReactionKind::Like), 1);

    let view = engine.apply(ReactionKind::Angry).await.unwrap();
    assert_eq!(view.mine, Some(ReactionKind::Angry));
    assert_eq!(view.tally.count(ReactionKind::Angry), 1);
    assert_eq!(view.tally.count(ReactionKind::Like), 0);

    let rows = harness.store.reaction_rows(content_id);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, ReactionKind::Angry);
}

#[tokio::test]
async fn test_reaction_toggle_off_removes_row() {
    let harness = TestHarness::new();
    harness.sign_in_named("bo");
    let content_id = ContentId::generate();
    let engine = harness.reaction_engine(content_id);

    engine.apply(ReactionKind::Sad).await.unwrap();
    let view = engine.apply(ReactionKind::Sad).await.unwrap();

    assert_eq!(view.mine, None);
    assert_eq!(view.tally.total(), 0);
    assert!(harness.store.reaction_rows(content_id).is_empty());
}

#[tokio::test]
async fn test_reaction_counts_span_users() {
    let harness = TestHarness::new();
    let content_id = ContentId::generate();
    let engine = harness.reaction_engine(content_id);

    harness.sign_in_named("ana");
    engine.apply(ReactionKind::Like).await.unwrap();
    harness.sign_in_named("bo");
    let view = engine.apply(ReactionKind::Sad).await.unwrap();

    assert_eq!(view.tally.count(ReactionKind::Like), 1);
    assert_eq!(view.tally.count(ReactionKind::Sad), 1);
    assert_eq!(view.tally.total(), 2);
    assert_eq!(view.mine, Some(ReactionKind::Sad));
}

#[tokio::test]
async fn test_duplicate_reaction_rows_converge_on_next_apply() {
    // Two sessions can race past each other's existence check and leave two
    // rows for one user. The next apply reconciles: it deletes every row for
    // the pair before writing the new choice.
    let harness = TestHarness::new();
    let user_id = harness.sign_in_named("ana");
    let content_id = ContentId::generate();

    ReactionRepository::create(
        &*harness.store,
        &Reaction::new(content_id, user_id, ReactionKind::Like),
    )
    .await
    .unwrap();
    ReactionRepository::create(
        &*harness.store,
        &Reaction::new(content_id, user_id, ReactionKind::Sad),
    )
    .await
    .unwrap();
    assert_eq!(harness.store.reaction_rows(content_id).len(), 2);

    let engine = harness.reaction_engine(content_id);
    let view = engine.apply(ReactionKind::Angry).await.unwrap();

    let rows = harness.store.reaction_rows(content_id);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, ReactionKind::Angry);
    assert_eq!(view.tally.total(), 1);
}

#[tokio::test]
async fn test_anonymous_reaction_refused_before_store() {
    let harness = TestHarness::new();
    harness.identity.sign_out();
    // If the engine touched the store at all, the injected fault would turn
    // the refusal into a Network error.
    harness.store.set_offline(true);

    let engine = harness.reaction_engine(ContentId::generate());
    let err = engine.apply(ReactionKind::Like).await.unwrap_err();

    assert!(matches!(err, EngageError::AuthRequired));
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_reaction_refresh_degrades_silently_when_offline() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    harness.store.set_offline(true);

    let engine = harness.reaction_engine(ContentId::generate());
    let view = engine.refresh().await;

    assert_eq!(view.tally.total(), 0);
    assert_eq!(view.mine, None);
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_detached_reaction_view_discards_results() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.reaction_engine(content_id);

    engine.detach();
    engine.apply(ReactionKind::Like).await.unwrap();

    // The write happened, but the detached view never sees it
    assert_eq!(harness.store.reaction_rows(content_id).len(), 1);
    assert_eq!(engine.view().tally.total(), 0);
    assert_eq!(engine.view().mine, None);
}

// ============================================================================
// Binary engagements: likes and bookmarks
// ============================================================================

#[tokio::test]
async fn test_like_and_bookmark_toggle_independently() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.engagement_engine(content_id);

    assert_eq!(
        engine.toggle(EngagementKind::Like).await.unwrap(),
        BinaryState::On
    );
    assert_eq!(
        engine.toggle(EngagementKind::Bookmark).await.unwrap(),
        BinaryState::On
    );
    assert_eq!(
        engine.toggle(EngagementKind::Like).await.unwrap(),
        BinaryState::Off
    );

    let view = engine.view();
    assert!(!view.like.is_on());
    assert!(view.bookmark.is_on());
    assert_eq!(harness.store.engagement_rows(content_id, EngagementKind::Like), 0);
    assert_eq!(
        harness.store.engagement_rows(content_id, EngagementKind::Bookmark),
        1
    );
}

#[tokio::test]
async fn test_like_counter_mirror_tracks_toggles() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let counters = ContentCounters {
        like_count: 5,
        ..ContentCounters::default()
    };
    let engine = harness.engagement_engine_with_counters(content_id, counters);

    engine.toggle(EngagementKind::Like).await.unwrap();
    assert_eq!(engine.view().counters.like_count, 6);

    engine.toggle(EngagementKind::Like).await.unwrap();
    assert_eq!(engine.view().counters.like_count, 5);
}

/// Engagement repository whose existence check reports false exactly once,
/// reproducing a second session inserting between the check and the write
struct StaleExistsRepo {
    inner: Arc<MemoryStore>,
    lied: AtomicBool,
}

#[async_trait]
impl EngagementRepository for StaleExistsRepo {
    async fn exists(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> Result<bool, EngageError> {
        if !self.lied.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        EngagementRepository::exists(&*self.inner, content_id, user_id, kind).await
    }

    async fn create(&self, engagement: &BinaryEngagement) -> Result<(), EngageError> {
        EngagementRepository::create(&*self.inner, engagement).await
    }

    async fn delete(
        &self,
        content_id: ContentId,
        user_id: UserId,
        kind: EngagementKind,
    ) -> Result<(), EngageError> {
        EngagementRepository::delete(&*self.inner, content_id, user_id, kind).await
    }
}

#[tokio::test]
async fn test_duplicate_bookmark_insert_is_absorbed() {
    // Another session inserted the bookmark row between this session's
    // existence check and its write: the insert conflicts, but the toggle
    // still settles On with no error notice.
    let harness = TestHarness::new();
    let user_id = harness.sign_in_named("ana");
    let content_id = ContentId::generate();

    EngagementRepository::create(
        &*harness.store,
        &BinaryEngagement::new(content_id, user_id, EngagementKind::Bookmark),
    )
    .await
    .unwrap();

    let repo = Arc::new(StaleExistsRepo {
        inner: harness.store.clone(),
        lied: AtomicBool::new(false),
    });
    let engine = harness.engagement_engine_with_repo(content_id, repo);

    let state = engine.toggle(EngagementKind::Bookmark).await.unwrap();
    assert_eq!(state, BinaryState::On);
    assert!(engine.view().bookmark.is_on());

    assert_eq!(harness.notifier.error_count(), 0);
    assert_eq!(
        harness.store.engagement_rows(content_id, EngagementKind::Bookmark),
        1
    );
}

#[tokio::test]
async fn test_anonymous_toggle_refused() {
    let harness = TestHarness::new();
    harness.identity.sign_out();
    harness.store.set_offline(true);

    let engine = harness.engagement_engine(ContentId::generate());
    let err = engine.toggle(EngagementKind::Like).await.unwrap_err();

    assert!(matches!(err, EngageError::AuthRequired));
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_toggle_success_produces_notice() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let engine = harness.engagement_engine(ContentId::generate());

    engine.toggle(EngagementKind::Bookmark).await.unwrap();
    let notice = harness.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Added to bookmarks");
}

#[tokio::test]
async fn test_offline_toggle_surfaces_network_notice() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    harness.store.set_offline(true);

    let engine = harness.engagement_engine(ContentId::generate());
    let err = engine.toggle(EngagementKind::Like).await.unwrap_err();

    assert!(matches!(err, EngageError::Network(_)));
    let notice = harness.notifier.last().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    // The toggle never applied; the local view must not flip
    assert!(!engine.view().like.is_on());
}

// ============================================================================
// Comments: panel, posting, deletion, likes
// ============================================================================

#[tokio::test]
async fn test_comment_post_and_listing() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.comment_engine(content_id);

    engine.load(CommentSort::Recency).await;
    let entry = engine
        .create(&CreateCommentRequest::new("first!"))
        .await
        .unwrap()
        .expect("not dropped");

    assert_eq!(entry.comment.content, "first!");
    assert_eq!(entry.author.as_ref().unwrap().display_name, "ana");
    assert!(!entry.liked_by_me);

    let panel = engine.panel();
    assert_eq!(panel.state, PanelState::Loaded);
    assert_eq!(panel.comment_count, 1);
    assert_eq!(panel.comments[0].comment.id, entry.comment.id);
    assert_eq!(harness.store.comment_rows(content_id), 1);
    assert_eq!(harness.notifier.last().unwrap().message, "Comment posted");
}

#[tokio::test]
async fn test_comment_body_is_trimmed_and_validated() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.comment_engine(content_id);

    let entry = engine
        .create(&CreateCommentRequest::new("  padded  "))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.comment.content, "padded");

    // Whitespace-only passes the length check but fails the trim check
    let err = engine
        .create(&CreateCommentRequest::new("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, EngageError::Validation(_)));
    assert_eq!(harness.store.comment_rows(content_id), 1);
}

#[tokio::test]
async fn test_oversized_comment_rejected_before_store() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    let engine = harness.comment_engine(content_id);

    let err = engine
        .create(&CreateCommentRequest::new(body_over_limit()))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(harness.store.comment_rows(content_id), 0);
    assert_eq!(harness.notifier.error_count(), 1);

    // Exactly at the limit is accepted
    engine
        .create(&CreateCommentRequest::new(body_at_limit()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(harness.store.comment_rows(content_id), 1);
}

#[tokio::test]
async fn test_only_author_can_delete() {
    let harness = TestHarness::new();
    let content_id = ContentId::generate();
    let author = harness.sign_in_named("ana");
    let comment = seed_comment(&harness.store, content_id, author, "mine").await;

    let engine = harness.comment_engine(content_id);
    engine.load(CommentSort::Recency).await;

    harness.sign_in_named("bo");
    let err = engine.delete(comment.id).await.unwrap_err();
    assert!(matches!(err, EngageError::NotCommentAuthor));
    assert_eq!(harness.store.comment_rows(content_id), 1);

    harness.identity.sign_in(author);
    engine.delete(comment.id).await.unwrap();
    assert_eq!(harness.store.comment_rows(content_id), 0);
    assert_eq!(engine.panel().comment_count, 0);
}

#[tokio::test]
async fn test_delete_unknown_comment() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let engine = harness.comment_engine(ContentId::generate());
    engine.load(CommentSort::Recency).await;

    let err = engine.delete(CommentId::generate()).await.unwrap_err();
    assert!(matches!(err, EngageError::CommentNotFound(_)));
}

#[tokio::test]
async fn test_comment_like_toggle_and_reload() {
    let harness = TestHarness::new();
    let content_id = ContentId::generate();
    let author = harness.sign_in_named("ana");
    let comment = seed_comment(&harness.store, content_id, author, "like me").await;

    harness.sign_in_named("bo");
    let engine = harness.comment_engine(content_id);
    engine.load(CommentSort::Recency).await;

    let state = engine.toggle_like(comment.id).await.unwrap();
    assert_eq!(state, BinaryState::On);
    let panel = engine.panel();
    assert_eq!(panel.comments[0].comment.like_count, 1);
    assert!(panel.comments[0].liked_by_me);

    // A fresh listing returns the persisted count and like mark
    let fresh = harness.comment_engine(content_id);
    let panel = fresh.load(CommentSort::Recency).await;
    assert_eq!(panel.comments[0].comment.like_count, 1);
    assert!(panel.comments[0].liked_by_me);

    let state = engine.toggle_like(comment.id).await.unwrap();
    assert_eq!(state, BinaryState::Off);
    assert_eq!(engine.panel().comments[0].comment.like_count, 0);
}

#[tokio::test]
async fn test_sort_orders() {
    let harness = TestHarness::new();
    let content_id = ContentId::generate();
    let ana = harness.sign_in_named("ana");
    let older = seed_comment(&harness.store, content_id, ana, "older").await;
    let newer = seed_comment(&harness.store, content_id, ana, "newer").await;

    harness.sign_in_named("bo");
    let engine = harness.comment_engine(content_id);
    engine.load(CommentSort::Recency).await;
    engine.toggle_like(older.id).await.unwrap();

    let panel = engine.set_sort(CommentSort::Popularity).await;
    assert_eq!(panel.sort, CommentSort::Popularity);
    assert_eq!(panel.comments[0].comment.id, older.id);

    let panel = engine.set_sort(CommentSort::Recency).await;
    assert_eq!(panel.comments[0].comment.id, newer.id);
}

#[tokio::test]
async fn test_panel_degrades_when_comments_table_missing() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    harness.store.drop_table("comments");

    let engine = harness.comment_engine(ContentId::generate());
    let panel = engine.load(CommentSort::Recency).await;

    assert_eq!(panel.state, PanelState::Degraded);
    assert!(panel.comments.is_empty());
    assert_eq!(panel.comment_count, 0);
    // Silent degradation: logged, never surfaced
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_degraded_panel_recovers_on_reload() {
    let harness = TestHarness::new();
    let author = harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    seed_comment(&harness.store, content_id, author, "still here").await;

    harness.store.drop_table("comments");
    let engine = harness.comment_engine(content_id);
    assert_eq!(engine.load(CommentSort::Recency).await.state, PanelState::Degraded);

    harness.store.restore_table("comments");
    let panel = engine.load(CommentSort::Recency).await;
    assert_eq!(panel.state, PanelState::Loaded);
    assert_eq!(panel.comment_count, 1);
}

#[tokio::test]
async fn test_anonymous_listing_has_no_like_marks() {
    let harness = TestHarness::new();
    let author = harness.sign_in_named("ana");
    let content_id = ContentId::generate();
    seed_comment(&harness.store, content_id, author, "visible to all").await;
    harness.identity.sign_out();

    let engine = harness.comment_engine(content_id);
    let panel = engine.load(CommentSort::Recency).await;

    assert_eq!(panel.state, PanelState::Loaded);
    assert_eq!(panel.comment_count, 1);
    assert!(!panel.comments[0].liked_by_me);

    let err = engine
        .create(&CreateCommentRequest::new("nope"))
        .await
        .unwrap_err();
    assert!(err.is_auth_required());
}

// ============================================================================
// Response DTOs
// ============================================================================

#[tokio::test]
async fn test_reaction_summary_serialization() {
    let harness = TestHarness::new();
    harness.sign_in_named("ana");
    let engine = harness.reaction_engine(ContentId::generate());
    let view = engine.apply(ReactionKind::Surprised).await.unwrap();

    let summary = engage_service::dto::ReactionSummary::from(view);
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["surprised"], 1);
    assert_eq!(json["mine"], "surprised");

    let empty = engage_service::dto::ReactionSummary::default();
    let json = serde_json::to_value(&empty).unwrap();
    // No choice means the field is omitted entirely
    assert!(json.get("mine").is_none());
}
