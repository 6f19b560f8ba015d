//! Engagement kind enums
//!
//! `ReactionKind` is the one-of-five exclusive choice on a content item;
//! `EngagementKind` selects one of the two existence-based engagement tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a kind from its store representation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown engagement kind: {0}")]
pub struct KindParseError(pub String);

/// One of the five mutually exclusive reactions on a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Sad,
    Angry,
    Surprised,
    Anxious,
}

impl ReactionKind {
    /// All kinds, in display order
    pub const ALL: [Self; 5] = [
        Self::Like,
        Self::Sad,
        Self::Angry,
        Self::Surprised,
        Self::Anxious,
    ];

    /// Stable name used as the store column value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Surprised => "surprised",
            Self::Anxious => "anxious",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "sad" => Ok(Self::Sad),
            "angry" => Ok(Self::Angry),
            "surprised" => Ok(Self::Surprised),
            "anxious" => Ok(Self::Anxious),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

/// An existence-based engagement: present or absent, no competing alternatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    Like,
    Bookmark,
}

impl EngagementKind {
    /// Stable name for logs and notices
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Bookmark => "bookmark",
        }
    }

    /// Name of the backing store table
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Like => "likes",
            Self::Bookmark => "bookmarks",
        }
    }
}

impl fmt::Display for EngagementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of a comment listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentSort {
    /// Newest first (created_at descending)
    #[default]
    Recency,
    /// Most liked first (like_count descending)
    Popularity,
}
