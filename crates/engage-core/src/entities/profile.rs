//! Author profile - denormalized display data joined by user id

use crate::value_objects::UserId;

/// Read-only author display data for decorating comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl AuthorProfile {
    /// Create a new AuthorProfile
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            avatar_url: None,
        }
    }

    /// Set the avatar URL
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}
