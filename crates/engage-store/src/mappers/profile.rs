//! Author profile entity <-> model mapper

use engage_core::{AuthorProfile, UserId};

use crate::models::ProfileModel;

/// Convert ProfileModel to AuthorProfile entity
impl From<ProfileModel> for AuthorProfile {
    fn from(model: ProfileModel) -> Self {
        AuthorProfile {
            user_id: UserId::new(model.user_id),
            display_name: model.display_name,
            avatar_url: model.avatar_url,
        }
    }
}
