//! Request DTOs
//!
//! Validated with the `validator` derive before any engine logic runs; the
//! comment engine additionally trims and re-checks the body so whitespace-only
//! input never reaches the store.

use serde::Deserialize;
use validator::Validate;

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000, message = "Comment must be 1-1000 characters"))]
    pub content: String,
}

impl CreateCommentRequest {
    /// Build a request from raw input
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
