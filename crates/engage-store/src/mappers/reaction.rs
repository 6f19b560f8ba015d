//! Reaction entity <-> model mapper

use engage_core::{ContentId, EngageError, Reaction, ReactionKind, UserId};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
///
/// Fails if the stored kind string is not a known reaction kind; a row like
/// that can only come from out-of-band writes and is reported as a store
/// error rather than silently dropped.
impl TryFrom<ReactionModel> for Reaction {
    type Error = EngageError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let kind: ReactionKind = model
            .kind
            .parse()
            .map_err(|_| EngageError::Store(format!("Unknown reaction kind: {}", model.kind)))?;

        Ok(Reaction {
            content_id: ContentId::new(model.content_id),
            user_id: UserId::new(model.user_id),
            kind,
            created_at: model.created_at,
        })
    }
}
