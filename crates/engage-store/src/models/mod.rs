//! Database models with SQLx `FromRow` derives

mod comment;
mod profile;
mod reaction;

pub use comment::CommentModel;
pub use profile::ProfileModel;
pub use reaction::{ReactionCountModel, ReactionModel};
