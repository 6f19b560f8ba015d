//! Comment entity <-> model mappers

use engage_core::{Comment, CommentId, ContentId, UserId};

use crate::models::CommentModel;

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            content_id: ContentId::new(model.content_id),
            author_id: UserId::new(model.author_id),
            content: model.content,
            like_count: model.like_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

