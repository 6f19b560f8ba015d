//! DTOs - request validation and response shapes

mod mappers;
mod requests;
mod responses;

pub use requests::CreateCommentRequest;
pub use responses::{AuthorResponse, CommentResponse, EngagementResponse, ReactionSummary};
