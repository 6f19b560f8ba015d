//! Reaction engine
//!
//! Enforces the one-reaction-per-user invariant with delete-before-insert
//! and re-derives the displayed counts from the full row set after every
//! mutation. The store offers no exclusivity constraint and no transaction;
//! correctness comes from re-derivation, not incremental counter math.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use engage_core::{
    ContentId, EngageError, Reaction, ReactionKind, ReactionTally, UserId,
};

use super::context::ServiceContext;
use super::error::{notice_for, ServiceResult};
use super::guard::OperationGuard;

/// Local display state for one content item's reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionView {
    /// Counts by kind, derived from the authoritative row set
    pub tally: ReactionTally,
    /// The current user's choice, if any
    pub mine: Option<ReactionKind>,
}

/// Per-content-item reaction state container
pub struct ReactionEngine {
    ctx: ServiceContext,
    content_id: ContentId,
    state: Mutex<ReactionView>,
    guard: OperationGuard,
    detached: AtomicBool,
}

impl ReactionEngine {
    /// Create an engine for one content item
    pub fn new(ctx: ServiceContext, content_id: ContentId) -> Self {
        Self {
            ctx,
            content_id,
            state: Mutex::new(ReactionView::default()),
            guard: OperationGuard::new(),
            detached: AtomicBool::new(false),
        }
    }

    /// Current local view
    pub fn view(&self) -> ReactionView {
        *self.state.lock()
    }

    /// Stop routing further store responses into this view
    ///
    /// In-flight requests are not aborted; their results are discarded.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }

    /// Re-derive the view from the store
    ///
    /// Passive load: any failure degrades silently to zero counts, it never
    /// blocks the page or raises a notice.
    #[instrument(skip(self), fields(content_id = %self.content_id))]
    pub async fn refresh(&self) -> ReactionView {
        let view = match self.read_view().await {
            Ok(view) => view,
            Err(err) => {
                warn!(error = %err, code = err.code(), "reaction load failed; showing empty state");
                ReactionView::default()
            }
        };
        self.commit(view);
        view
    }

    /// Apply a reaction choice: set, toggle off, or switch
    ///
    /// Refuses with `AuthRequired` before any store call when anonymous.
    /// A duplicate invocation while one is in flight is dropped and the
    /// current view returned unchanged.
    #[instrument(skip(self), fields(content_id = %self.content_id))]
    pub async fn apply(&self, kind: ReactionKind) -> ServiceResult<ReactionView> {
        let user_id = self.ctx.require_user()?;

        let Some(_token) = self.guard.try_begin() else {
            debug!("duplicate apply dropped; operation already in flight");
            return Ok(self.view());
        };

        match self.apply_inner(user_id, kind).await {
            Ok(view) => Ok(view),
            Err(err) => {
                if err.is_silent() {
                    warn!(error = %err, "reaction apply degraded");
                } else if let Some(notice) = notice_for(&err) {
                    self.ctx.notify(notice);
                }
                Err(err)
            }
        }
    }

    async fn apply_inner(
        &self,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionView> {
        let existing = self
            .ctx
            .reaction_repo()
            .find(self.content_id, user_id)
            .await?;

        let mine = match existing {
            None => self.insert(user_id, kind).await?,
            Some(prior) if prior.kind == kind => {
                // Toggle-off
                self.ctx
                    .reaction_repo()
                    .delete(self.content_id, user_id)
                    .await?;
                None
            }
            Some(prior) => self.switch(user_id, prior.kind, kind).await?,
        };

        // Canonical reconciliation: counts are a pure function of the row set.
        let tally = match self.ctx.reaction_repo().count_by_kind(self.content_id).await {
            Ok(counts) => ReactionTally::from_counts(counts),
            Err(err) => {
                warn!(error = %err, "reaction recount failed; keeping prior tally");
                self.view().tally
            }
        };

        let view = ReactionView { tally, mine };
        self.commit(view);
        Ok(view)
    }

    /// First reaction from this user on the item
    async fn insert(
        &self,
        user_id: UserId,
        kind: ReactionKind,
    ) -> ServiceResult<Option<ReactionKind>> {
        match self
            .ctx
            .reaction_repo()
            .create(&Reaction::new(self.content_id, user_id, kind))
            .await
        {
            Ok(()) => Ok(Some(kind)),
            Err(EngageError::DuplicateKey) => {
                // Another session won the race; the desired state exists.
                debug!(kind = %kind, "reaction already present");
                Ok(Some(kind))
            }
            Err(err) => Err(err),
        }
    }

    /// Toggle-with-switch: delete the prior choice, then insert the new one.
    /// The two writes are sequential, not transactional.
    async fn switch(
        &self,
        user_id: UserId,
        from: ReactionKind,
        to: ReactionKind,
    ) -> ServiceResult<Option<ReactionKind>> {
        self.ctx
            .reaction_repo()
            .delete(self.content_id, user_id)
            .await?;

        match self
            .ctx
            .reaction_repo()
            .create(&Reaction::new(self.content_id, user_id, to))
            .await
        {
            Ok(()) => Ok(Some(to)),
            Err(EngageError::DuplicateKey) => Ok(Some(to)),
            Err(err) => {
                // The delete landed but the insert did not: the user now has
                // no reaction. Accepted degraded state; the recount below
                // resynchronizes the display with the store.
                warn!(error = %err, from = %from, to = %to, "reaction switch interrupted");
                if let Some(notice) = notice_for(&err) {
                    self.ctx.notify(notice);
                }
                Ok(None)
            }
        }
    }

    async fn read_view(&self) -> ServiceResult<ReactionView> {
        let counts = self.ctx.reaction_repo().count_by_kind(self.content_id).await?;
        let mine = match self.ctx.current_user() {
            Some(user_id) => self
                .ctx
                .reaction_repo()
                .find(self.content_id, user_id)
                .await?
                .map(|reaction| reaction.kind),
            None => None,
        };
        Ok(ReactionView {
            tally: ReactionTally::from_counts(counts),
            mine,
        })
    }

    fn commit(&self, view: ReactionView) {
        if self.detached.load(Ordering::Acquire) {
            debug!("view detached; discarding reaction state");
            return;
        }
        *self.state.lock() = view;
    }
}
