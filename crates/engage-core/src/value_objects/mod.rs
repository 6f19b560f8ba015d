//! Value objects - immutable domain primitives

mod ids;
mod kinds;

pub use ids::{CommentId, ContentId, UserId};
pub use kinds::{CommentSort, EngagementKind, KindParseError, ReactionKind};
