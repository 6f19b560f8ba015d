//! Comment engine
//!
//! Owns the comment panel for one content item: listing with sort, posting,
//! author-only deletion, and per-comment like toggles. Mutations after the
//! initial load edit the panel in place; the panel never re-enters Loading
//! once it reached Loaded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};
use validator::Validate;

use engage_core::{
    AuthorProfile, BinaryState, Comment, CommentId, CommentLike, CommentSort, ContentId,
    EngageError, Notice, UserId,
};

use crate::dto::CreateCommentRequest;

use super::context::ServiceContext;
use super::error::{notice_for, ServiceResult};
use super::guard::OperationGuard;

/// Lifecycle of the comment panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Nothing loaded yet
    #[default]
    Uninitialized,
    /// Initial listing in flight
    Loading,
    /// Listing succeeded; the panel is interactive
    Loaded,
    /// Listing failed; the panel shows an empty state and stays usable
    Degraded,
}

/// One comment decorated for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentViewEntry {
    pub comment: Comment,
    /// Display data for the author; absent when the profile lookup failed
    pub author: Option<AuthorProfile>,
    pub liked_by_me: bool,
}

/// The full panel snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentPanel {
    pub state: PanelState,
    pub sort: CommentSort,
    pub comments: Vec<CommentViewEntry>,
    pub comment_count: i64,
}

/// Per-content-item comment panel controller
pub struct CommentEngine {
    ctx: ServiceContext,
    content_id: ContentId,
    panel: Mutex<CommentPanel>,
    post_guard: OperationGuard,
    /// One guard per comment so likes on different comments never block
    /// each other
    like_guards: DashMap<CommentId, OperationGuard>,
    detached: AtomicBool,
}

impl CommentEngine {
    /// Create an engine for one content item
    pub fn new(ctx: ServiceContext, content_id: ContentId) -> Self {
        Self {
            ctx,
            content_id,
            panel: Mutex::new(CommentPanel::default()),
            post_guard: OperationGuard::new(),
            like_guards: DashMap::new(),
            detached: AtomicBool::new(false),
        }
    }

    /// Current panel snapshot
    pub fn panel(&self) -> CommentPanel {
        self.panel.lock().clone()
    }

    /// Stop routing further store responses into this panel
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Release);
    }

    /// Load the comment listing in the given order
    ///
    /// Passive load: failures degrade the panel to an empty state without a
    /// notice. The listing is also the reconciliation point for the
    /// denormalized per-comment like counts, which come back as stored.
    #[instrument(skip(self), fields(content_id = %self.content_id))]
    pub async fn load(&self, sort: CommentSort) -> CommentPanel {
        self.commit(|panel| {
            if panel.state == PanelState::Uninitialized {
                panel.state = PanelState::Loading;
            }
            panel.sort = sort;
        });

        match self.read_entries(sort).await {
            Ok(entries) => self.commit(|panel| {
                panel.state = PanelState::Loaded;
                panel.comment_count = entries.len() as i64;
                panel.comments = entries;
            }),
            Err(err) => {
                warn!(error = %err, code = err.code(), "comment load failed; degrading panel");
                self.commit(|panel| {
                    panel.state = PanelState::Degraded;
                    panel.comments.clear();
                    panel.comment_count = 0;
                });
            }
        }
        self.panel()
    }

    /// Switch the sort order and re-list
    pub async fn set_sort(&self, sort: CommentSort) -> CommentPanel {
        if self.panel.lock().sort == sort {
            return self.panel();
        }
        self.load(sort).await
    }

    /// Post a new comment
    ///
    /// Validates before any store traffic. Returns `Ok(None)` when an
    /// identical post is already in flight; on success the new entry is
    /// prepended locally without re-listing.
    #[instrument(skip(self, request), fields(content_id = %self.content_id))]
    pub async fn create(
        &self,
        request: &CreateCommentRequest,
    ) -> ServiceResult<Option<CommentViewEntry>> {
        match self.create_inner(request).await {
            Ok(entry) => Ok(entry),
            Err(err) => {
                self.report(&err, "comment create failed");
                Err(err)
            }
        }
    }

    async fn create_inner(
        &self,
        request: &CreateCommentRequest,
    ) -> ServiceResult<Option<CommentViewEntry>> {
        let user_id = self.ctx.require_user()?;
        request
            .validate()
            .map_err(|e| EngageError::Validation(e.to_string()))?;
        let body = Comment::validate_body(&request.content)?;

        let Some(_token) = self.post_guard.try_begin() else {
            debug!("duplicate post dropped; one already in flight");
            return Ok(None);
        };

        let comment = Comment::new(self.content_id, user_id, body);
        self.ctx.comment_repo().create(&comment).await?;

        // Author lookup is cosmetic; a miss never fails the post.
        let author = match self.ctx.profile_repo().find_by_id(user_id).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "author profile lookup failed");
                None
            }
        };

        let entry = CommentViewEntry {
            comment,
            author,
            liked_by_me: false,
        };
        self.commit(|panel| {
            panel.comments.insert(0, entry.clone());
            panel.comment_count += 1;
        });
        self.ctx.notify(Notice::success("Comment posted"));
        Ok(Some(entry))
    }

    /// Delete one of the current user's comments
    #[instrument(skip(self), fields(content_id = %self.content_id, comment_id = %comment_id))]
    pub async fn delete(&self, comment_id: CommentId) -> ServiceResult<()> {
        match self.delete_inner(comment_id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.report(&err, "comment delete failed");
                Err(err)
            }
        }
    }

    async fn delete_inner(&self, comment_id: CommentId) -> ServiceResult<()> {
        let user_id = self.ctx.require_user()?;

        let comment = match self.find_local(comment_id) {
            Some(entry) => entry.comment,
            None => self
                .ctx
                .comment_repo()
                .find_by_id(comment_id)
                .await?
                .ok_or(EngageError::CommentNotFound(comment_id))?,
        };
        if !comment.is_author(user_id) {
            return Err(EngageError::NotCommentAuthor);
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        self.commit(|panel| {
            panel.comments.retain(|entry| entry.comment.id != comment_id);
            panel.comment_count = (panel.comment_count - 1).max(0);
        });
        self.ctx.notify(Notice::success("Comment deleted"));
        Ok(())
    }

    /// Flip the current user's like on one comment
    ///
    /// Returns the resulting state. The denormalized count write is best
    /// effort; a miss there leaves drift that the next full listing heals.
    #[instrument(skip(self), fields(comment_id = %comment_id))]
    pub async fn toggle_like(&self, comment_id: CommentId) -> ServiceResult<BinaryState> {
        match self.toggle_like_inner(comment_id).await {
            Ok(state) => Ok(state),
            Err(err) => {
                self.report(&err, "comment like toggle failed");
                Err(err)
            }
        }
    }

    async fn toggle_like_inner(&self, comment_id: CommentId) -> ServiceResult<BinaryState> {
        let user_id = self.ctx.require_user()?;

        let entry = self
            .find_local(comment_id)
            .ok_or(EngageError::CommentNotFound(comment_id))?;

        let guard = self
            .like_guards
            .entry(comment_id)
            .or_default()
            .clone();
        let Some(_token) = guard.try_begin() else {
            debug!("duplicate like toggle dropped");
            return Ok(BinaryState::from(entry.liked_by_me));
        };

        let repo = self.ctx.comment_like_repo();
        let on = repo.exists(comment_id, user_id).await?;

        let next = if on {
            repo.delete(comment_id, user_id).await?;
            BinaryState::Off
        } else {
            match repo.create(&CommentLike::new(comment_id, user_id)).await {
                Ok(()) => BinaryState::On,
                Err(EngageError::DuplicateKey) => {
                    debug!("comment like already present");
                    BinaryState::On
                }
                Err(err) => return Err(err),
            }
        };

        let new_count = if next.is_on() {
            entry.comment.like_count + 1
        } else {
            (entry.comment.like_count - 1).max(0)
        };

        // Mirror write; drift is healed by the next listing.
        if let Err(err) = self
            .ctx
            .comment_repo()
            .set_like_count(comment_id, new_count)
            .await
        {
            warn!(error = %err, "comment like count write failed");
        }

        self.commit(|panel| {
            if let Some(entry) = panel
                .comments
                .iter_mut()
                .find(|entry| entry.comment.id == comment_id)
            {
                entry.liked_by_me = next.is_on();
                entry.comment.like_count = new_count;
            }
        });
        Ok(next)
    }

    /// Full listing, decorated with author profiles and the current user's
    /// like marks
    async fn read_entries(&self, sort: CommentSort) -> ServiceResult<Vec<CommentViewEntry>> {
        let comments = self
            .ctx
            .comment_repo()
            .find_by_content(self.content_id, sort)
            .await?;

        let liked: Vec<CommentId> = match self.ctx.current_user() {
            Some(user_id) => {
                let ids: Vec<CommentId> = comments.iter().map(|c| c.id).collect();
                self.ctx
                    .comment_like_repo()
                    .liked_by_user(user_id, &ids)
                    .await?
            }
            None => Vec::new(),
        };

        let mut profiles: HashMap<UserId, Option<AuthorProfile>> = HashMap::new();
        let mut entries = Vec::with_capacity(comments.len());
        for comment in comments {
            let author = match profiles.get(&comment.author_id) {
                Some(cached) => cached.clone(),
                None => {
                    let fetched = match self.ctx.profile_repo().find_by_id(comment.author_id).await
                    {
                        Ok(profile) => profile,
                        Err(err) => {
                            warn!(error = %err, author_id = %comment.author_id, "author profile lookup failed");
                            None
                        }
                    };
                    profiles.insert(comment.author_id, fetched.clone());
                    fetched
                }
            };
            let liked_by_me = liked.contains(&comment.id);
            entries.push(CommentViewEntry {
                comment,
                author,
                liked_by_me,
            });
        }
        Ok(entries)
    }

    fn find_local(&self, comment_id: CommentId) -> Option<CommentViewEntry> {
        self.panel
            .lock()
            .comments
            .iter()
            .find(|entry| entry.comment.id == comment_id)
            .cloned()
    }

    fn report(&self, err: &EngageError, context: &'static str) {
        if err.is_silent() {
            warn!(error = %err, code = err.code(), "{context}");
        } else if let Some(notice) = notice_for(err) {
            self.ctx.notify(notice);
        }
    }

    fn commit(&self, apply: impl FnOnce(&mut CommentPanel)) {
        if self.detached.load(Ordering::Acquire) {
            debug!("panel detached; discarding comment state");
            return;
        }
        apply(&mut self.panel.lock());
    }
}
