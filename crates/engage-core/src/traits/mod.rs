//! Ports - traits the engagement layer depends on
//!
//! The domain layer defines what it needs; the infrastructure layer
//! (store, identity, UI) provides the implementations.

mod identity;
mod notifier;
mod repositories;

pub use identity::IdentityProvider;
pub use notifier::{Notice, NoticeKind, Notifier};
pub use repositories::{
    CommentLikeRepository, CommentRepository, EngagementRepository, ProfileRepository,
    ReactionRepository, StoreResult,
};
