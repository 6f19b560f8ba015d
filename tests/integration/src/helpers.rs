//! Test harness: engines wired to the in-memory store
//!
//! Provides a settable identity, a notifier that records every notice, and
//! constructors for the three engines sharing one store instance.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use engage_common::try_init_tracing;
use engage_core::{
    AuthorProfile, ContentCounters, ContentId, EngagementRepository, IdentityProvider, Notice,
    NoticeKind, Notifier, UserId,
};
use engage_service::{CommentEngine, EngagementEngine, ReactionEngine, ServiceContext};
use engage_store::MemoryStore;

/// Identity provider whose session can be set and cleared by the test
#[derive(Default)]
pub struct TestIdentity {
    user: RwLock<Option<UserId>>,
}

impl TestIdentity {
    pub fn sign_in(&self, user_id: UserId) {
        *self.user.write() = Some(user_id);
    }

    pub fn sign_out(&self) {
        *self.user.write() = None;
    }
}

impl IdentityProvider for TestIdentity {
    fn current_user(&self) -> Option<UserId> {
        *self.user.read()
    }
}

/// Notifier that keeps every notice instead of the usual single slot
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }

    pub fn error_count(&self) -> usize {
        self.notices
            .lock()
            .iter()
            .filter(|notice| notice.kind == NoticeKind::Error)
            .count()
    }

    pub fn clear(&self) {
        self.notices.lock().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// One store, one identity, one notifier, shared by every engine built here
pub struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub identity: Arc<TestIdentity>,
    pub notifier: Arc<RecordingNotifier>,
    ctx: ServiceContext,
}

impl TestHarness {
    pub fn new() -> Self {
        let _ = try_init_tracing();

        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(TestIdentity::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let ctx = ServiceContext::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            identity.clone(),
            notifier.clone(),
        );

        Self {
            store,
            identity,
            notifier,
            ctx,
        }
    }

    /// Sign in a fresh user and seed a profile for them
    pub fn sign_in_named(&self, display_name: &str) -> UserId {
        let user_id = UserId::generate();
        self.store
            .seed_profile(AuthorProfile::new(user_id, display_name));
        self.identity.sign_in(user_id);
        user_id
    }

    pub fn reaction_engine(&self, content_id: ContentId) -> ReactionEngine {
        ReactionEngine::new(self.ctx.clone(), content_id)
    }

    pub fn engagement_engine(&self, content_id: ContentId) -> EngagementEngine {
        EngagementEngine::new(self.ctx.clone(), content_id, ContentCounters::default())
    }

    pub fn engagement_engine_with_counters(
        &self,
        content_id: ContentId,
        counters: ContentCounters,
    ) -> EngagementEngine {
        EngagementEngine::new(self.ctx.clone(), content_id, counters)
    }

    pub fn comment_engine(&self, content_id: ContentId) -> CommentEngine {
        CommentEngine::new(self.ctx.clone(), content_id)
    }

    /// Engagement engine whose context uses a substitute engagement
    /// repository, for staging store-level races
    pub fn engagement_engine_with_repo(
        &self,
        content_id: ContentId,
        repo: Arc<dyn EngagementRepository>,
    ) -> EngagementEngine {
        let ctx = ServiceContext::new(
            self.store.clone(),
            repo,
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.identity.clone(),
            self.notifier.clone(),
        );
        EngagementEngine::new(ctx, content_id, ContentCounters::default())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
