//! PostgreSQL repository implementations

mod comment;
mod comment_like;
mod engagement;
mod error;
mod profile;
mod reaction;

pub use comment::PgCommentRepository;
pub use comment_like::PgCommentLikeRepository;
pub use engagement::PgEngagementRepository;
pub use error::map_store_error;
pub use profile::PgProfileRepository;
pub use reaction::PgReactionRepository;
