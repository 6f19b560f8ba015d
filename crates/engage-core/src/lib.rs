//! # engage-core
//!
//! Domain layer for the engagement consistency layer: entities, value objects,
//! the error taxonomy, and the ports (repository/identity/notifier traits).
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AuthorProfile, BinaryEngagement, BinaryState, Comment, CommentLike, ContentCounters,
    ContentItem, Reaction, ReactionTally, MAX_COMMENT_LEN,
};
pub use error::EngageError;
pub use traits::{
    CommentLikeRepository, CommentRepository, EngagementRepository, IdentityProvider, Notice,
    NoticeKind, Notifier, ProfileRepository, ReactionRepository, StoreResult,
};
pub use value_objects::{
    CommentId, CommentSort, ContentId, EngagementKind, KindParseError, ReactionKind, UserId,
};
