//! Service context - dependency container for the engines
//!
//! Holds the repository ports, the identity provider, and the notification
//! surface. Cloning is cheap (all fields are Arcs), so each per-content-item
//! engine carries its own copy.

use std::sync::Arc;

use engage_core::{
    CommentLikeRepository, CommentRepository, EngagementRepository, EngageError,
    IdentityProvider, Notice, Notifier, ProfileRepository, ReactionRepository, UserId,
};

/// Dependency container passed to every engine
#[derive(Clone)]
pub struct ServiceContext {
    reaction_repo: Arc<dyn ReactionRepository>,
    engagement_repo: Arc<dyn EngagementRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    comment_like_repo: Arc<dyn CommentLikeRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        reaction_repo: Arc<dyn ReactionRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        comment_like_repo: Arc<dyn CommentLikeRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            reaction_repo,
            engagement_repo,
            comment_repo,
            comment_like_repo,
            profile_repo,
            identity,
            notifier,
        }
    }

    // === Repositories ===

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the binary engagement repository
    pub fn engagement_repo(&self) -> &dyn EngagementRepository {
        self.engagement_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the comment like repository
    pub fn comment_like_repo(&self) -> &dyn CommentLikeRepository {
        self.comment_like_repo.as_ref()
    }

    /// Get the author profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    // === Identity ===

    /// The current authenticated user, if any
    pub fn current_user(&self) -> Option<UserId> {
        self.identity.current_user()
    }

    /// The current user, or AuthRequired
    ///
    /// Called before any store traffic: an anonymous engagement attempt is
    /// refused outright, never silently dropped.
    pub fn require_user(&self) -> Result<UserId, EngageError> {
        self.identity.current_user().ok_or(EngageError::AuthRequired)
    }

    // === Notifications ===

    /// Show a notice on the notification surface
    pub fn notify(&self, notice: Notice) {
        self.notifier.show(notice);
    }
}
