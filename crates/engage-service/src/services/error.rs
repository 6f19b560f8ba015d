//! Service result alias and the notice policy
//!
//! One error taxonomy serves every layer; what varies per failure is whether
//! the user sees it. The policy: failures of actions the user directly
//! initiated are surfaced, passive load failures and absent relations are
//! logged only, and a duplicate key is success wearing a different status.

use engage_core::{EngageError, Notice};

/// Result type for engine operations
pub type ServiceResult<T> = Result<T, EngageError>;

/// Map a failure to the notice shown for it, if any
///
/// `None` means the failure is not surfaced: AuthRequired turns into a login
/// redirect owned by the caller, DuplicateKey is absorbed as the desired
/// state, and RelationMissing degrades silently.
pub fn notice_for(err: &EngageError) -> Option<Notice> {
    match err {
        EngageError::AuthRequired | EngageError::DuplicateKey | EngageError::RelationMissing(_) => {
            None
        }
        EngageError::Validation(msg) => Some(Notice::error(msg.clone())),
        EngageError::ContentTooLong { max } => Some(Notice::error(format!(
            "Comment is too long (max {max} characters)"
        ))),
        EngageError::PermissionDenied(_) => Some(Notice::error(
            "You don't have permission to do that".to_string(),
        )),
        EngageError::Network(_) => Some(Notice::error(
            "Connection problem, please try again".to_string(),
        )),
        EngageError::Store(_) => Some(Notice::error("Something went wrong".to_string())),
        EngageError::CommentNotFound(_) => Some(Notice::error("Comment no longer exists".to_string())),
        EngageError::NotCommentAuthor => {
            Some(Notice::error("Only the author can delete this comment".to_string()))
        }
    }
}
