//! Engagement error taxonomy
//!
//! One taxonomy is shared by every layer: the store maps backend failures
//! into it and the engines decide, per variant, whether a failure is
//! surfaced to the user, absorbed as "already done", or silently degraded.

use thiserror::Error;

use crate::value_objects::CommentId;

/// Errors produced by the engagement layer
#[derive(Debug, Error)]
pub enum EngageError {
    // =========================================================================
    // Refused before any store call
    // =========================================================================
    /// No authenticated identity; the caller owns the login redirect
    #[error("Authentication required")]
    AuthRequired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Store-level outcomes
    // =========================================================================
    /// Uniqueness conflict; the desired state already exists
    #[error("Duplicate key")]
    DuplicateKey,

    /// Backend authorization rule rejected the write
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Backing table is not provisioned; degrade to empty state
    #[error("Relation missing: {0}")]
    RelationMissing(String),

    /// Transport failure; the operation is considered not applied
    #[error("Network error: {0}")]
    Network(String),

    /// Residual store failure
    #[error("Store error: {0}")]
    Store(String),

    // =========================================================================
    // Comment engine
    // =========================================================================
    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Not the comment author")]
    NotCommentAuthor,
}

impl EngageError {
    /// Get an error code string for logs and notices
    pub fn code(&self) -> &'static str {
        match self {
            Self::AuthRequired => "AUTH_REQUIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::DuplicateKey => "DUPLICATE_KEY",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::RelationMissing(_) => "RELATION_MISSING",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Store(_) => "STORE_ERROR",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
        }
    }

    /// Check if this is the missing-identity refusal
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    /// Check if this is an input validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is a uniqueness conflict ("desired state already achieved")
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateKey)
    }

    /// Check if this failure is logged but never surfaced to the user
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::RelationMissing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EngageError::AuthRequired.code(), "AUTH_REQUIRED");
        assert_eq!(EngageError::DuplicateKey.code(), "DUPLICATE_KEY");
        assert_eq!(
            EngageError::RelationMissing("reactions".to_string()).code(),
            "RELATION_MISSING"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(EngageError::AuthRequired.is_auth_required());
        assert!(EngageError::ContentTooLong { max: 1000 }.is_validation());
        assert!(EngageError::DuplicateKey.is_conflict());
        assert!(EngageError::RelationMissing("likes".to_string()).is_silent());
        assert!(!EngageError::Network("timeout".to_string()).is_silent());
    }

    #[test]
    fn test_error_display() {
        let err = EngageError::ContentTooLong { max: 1000 };
        assert_eq!(err.to_string(), "Content too long: max 1000 characters");

        let err = EngageError::PermissionDenied("row level security".to_string());
        assert_eq!(err.to_string(), "Permission denied: row level security");
    }
}
