//! Binary engagement entity - existence-based like/bookmark records

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentId, EngagementKind, UserId};

/// Binary engagement entity
///
/// Row existence is the boolean state. A store-level uniqueness violation on
/// insert means another write already produced the desired state and is
/// handled as success, not failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryEngagement {
    pub content_id: ContentId,
    pub user_id: UserId,
    pub kind: EngagementKind,
    pub created_at: DateTime<Utc>,
}

impl BinaryEngagement {
    /// Create a new BinaryEngagement
    pub fn new(content_id: ContentId, user_id: UserId, kind: EngagementKind) -> Self {
        Self {
            content_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Resolved state of a binary engagement after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinaryState {
    On,
    #[default]
    Off,
}

impl BinaryState {
    #[inline]
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Flip the state
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl From<bool> for BinaryState {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}
