//! Domain entities

mod comment;
mod content_item;
mod engagement;
mod profile;
mod reaction;

pub use comment::{Comment, CommentLike, MAX_COMMENT_LEN};
pub use content_item::{ContentCounters, ContentItem};
pub use engagement::{BinaryEngagement, BinaryState};
pub use profile::AuthorProfile;
pub use reaction::{Reaction, ReactionTally};
