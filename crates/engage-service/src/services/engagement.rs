//! Binary engagement engine (like / bookmark)
//!
//! Each kind is a pure existence toggle against its own relation. Unlike
//! reactions, a toggle does not re-read the store afterwards: the on/off bit
//! is known locally and the like counter is mirrored with floored arithmetic.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use engage_core::{
    BinaryEngagement, BinaryState, ContentCounters, ContentId, EngageError, EngagementKind,
    Notice, UserId,
};

use super::context::ServiceContext;
use super::error::{notice_for, ServiceResult};
use super::guard::OperationGuard;

/// Local display state for one content item's binary engagements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementView {
    pub like: BinaryState,
    pub bookmark: BinaryState,
    /// Locally mirrored counters; authoritative values come from page load
    pub counters: ContentCounters,
}

/// Per-content-item like and bookmark state container
///
/// The two kinds carry independent guards: a like in flight never blocks a
/// bookmark.
pub struct EngagementEngine {
    ctx: ServiceContext,
    content_id: ContentId,
    state: Mutex<EngagementView>,
    like_guard: OperationGuard,
    bookmark_guard: OperationGuard,
    detached: AtomicBool,
}

impl EngagementEngine {
    /// Create an engine seeded with the counters the page loaded with
    pub fn new(ctx: ServiceContext, content_id: ContentId, counters: ContentCounters) -> Self {
        Self {
            ctx,
            content_id,
            state: Mutex::new(EngagementView {
                like: BinaryState::Off,
                bookmark: BinaryState::Off,
                counters,
            }),
            like_guard: OperationGuard::new(),
            bookmark_guard: OperationGuard::new(),
            detached: AtomicBool::new(false),
        }
    }

    /// Current local view
    pub fn view(&self) -> EngagementView {
        *self.state.lock()
    }

    /// Stop routing further store responses into this view
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }

    /// Load the current user's on/off bits from the store
    ///
    /// Passive load: failures degrade silently to Off and never raise a
    /// notice. Anonymous sessions skip the store entirely.
    #[instrument(skip(self), fields(content_id = %self.content_id))]
    pub async fn refresh(&self) -> EngagementView {
        if let Some(user_id) = self.ctx.current_user() {
            let like = self.read_state(EngagementKind::Like, user_id).await;
            let bookmark = self.read_state(EngagementKind::Bookmark, user_id).await;
            self.commit(|view| {
                view.like = like;
                view.bookmark = bookmark;
            });
        }
        self.view()
    }

    /// Flip one engagement kind for the current user
    ///
    /// Returns the resulting state for that kind. A duplicate invocation
    /// while one is in flight for the same kind is dropped.
    #[instrument(skip(self), fields(content_id = %self.content_id, kind = %kind))]
    pub async fn toggle(&self, kind: EngagementKind) -> ServiceResult<BinaryState> {
        let user_id = self.ctx.require_user()?;

        let guard = match kind {
            EngagementKind::Like => &self.like_guard,
            EngagementKind::Bookmark => &self.bookmark_guard,
        };
        let Some(_token) = guard.try_begin() else {
            debug!("duplicate toggle dropped; operation already in flight");
            return Ok(self.state_of(kind));
        };

        match self.toggle_inner(kind, user_id).await {
            Ok(state) => {
                self.ctx.notify(Notice::success(toggle_message(kind, state)));
                Ok(state)
            }
            Err(err) => {
                if err.is_silent() {
                    warn!(error = %err, "engagement toggle degraded");
                } else if let Some(notice) = notice_for(&err) {
                    self.ctx.notify(notice);
                }
                Err(err)
            }
        }
    }

    async fn toggle_inner(
        &self,
        kind: EngagementKind,
        user_id: UserId,
    ) -> ServiceResult<BinaryState> {
        let repo = self.ctx.engagement_repo();
        let on = repo.exists(self.content_id, user_id, kind).await?;

        let next = if on {
            repo.delete(self.content_id, user_id, kind).await?;
            BinaryState::Off
        } else {
            match repo
                .create(&BinaryEngagement::new(self.content_id, user_id, kind))
                .await
            {
                Ok(()) => BinaryState::On,
                // Another session inserted between our existence check and
                // the write; the row is there, which is what we wanted.
                Err(EngageError::DuplicateKey) => {
                    debug!("engagement already present");
                    BinaryState::On
                }
                Err(err) => return Err(err),
            }
        };

        self.commit(|view| {
            match kind {
                EngagementKind::Like => {
                    view.like = next;
                    if next.is_on() {
                        view.counters.increment_likes();
                    } else {
                        view.counters.decrement_likes();
                    }
                }
                EngagementKind::Bookmark => view.bookmark = next,
            }
        });
        Ok(next)
    }

    fn state_of(&self, kind: EngagementKind) -> BinaryState {
        let view = self.state.lock();
        match kind {
            EngagementKind::Like => view.like,
            EngagementKind::Bookmark => view.bookmark,
        }
    }

    async fn read_state(&self, kind: EngagementKind, user_id: UserId) -> BinaryState {
        match self
            .ctx
            .engagement_repo()
            .exists(self.content_id, user_id, kind)
            .await
        {
            Ok(on) => BinaryState::from(on),
            Err(err) => {
                warn!(error = %err, kind = %kind, "engagement load failed; showing off state");
                BinaryState::Off
            }
        }
    }

    fn commit(&self, apply: impl FnOnce(&mut EngagementView)) {
        if self.detached.load(Ordering::Acquire) {
            debug!("view detached; discarding engagement state");
            return;
        }
        apply(&mut self.state.lock());
    }
}

fn toggle_message(kind: EngagementKind, state: BinaryState) -> String {
    match (kind, state) {
        (EngagementKind::Like, BinaryState::On) => "Liked".to_string(),
        (EngagementKind::Like, BinaryState::Off) => "Like removed".to_string(),
        (EngagementKind::Bookmark, BinaryState::On) => "Added to bookmarks".to_string(),
        (EngagementKind::Bookmark, BinaryState::Off) => "Removed from bookmarks".to_string(),
    }
}
