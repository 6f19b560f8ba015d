//! Author profile database model

use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub user_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}
