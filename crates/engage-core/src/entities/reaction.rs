//! Reaction entity - one user's exclusive emotional response to a content item

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentId, ReactionKind, UserId};

/// Reaction entity
///
/// Invariant: at most one row per (content_id, user_id) at any time. The store
/// does not enforce this; the reaction engine's delete-before-insert logic does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub content_id: ContentId,
    pub user_id: UserId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(content_id: ContentId, user_id: UserId, kind: ReactionKind) -> Self {
        Self {
            content_id,
            user_id,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Check whether this reaction is of a specific kind
    #[inline]
    pub fn is_kind(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }
}

/// Per-kind reaction counts for display
///
/// Always derived from the authoritative row set, never maintained
/// incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionTally {
    counts: [i64; ReactionKind::ALL.len()],
}

impl ReactionTally {
    /// Empty tally
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ReactionKind::ALL.len()],
        }
    }

    /// Derive a tally from a sequence of reaction kinds
    pub fn from_kinds<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ReactionKind>,
    {
        let mut tally = Self::new();
        for kind in kinds {
            tally.counts[Self::slot(kind)] += 1;
        }
        tally
    }

    /// Derive a tally from (kind, count) pairs, e.g. a GROUP BY result
    pub fn from_counts<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ReactionKind, i64)>,
    {
        let mut tally = Self::new();
        for (kind, count) in pairs {
            tally.counts[Self::slot(kind)] = count.max(0);
        }
        tally
    }

    /// Count for one kind
    #[must_use]
    pub fn count(&self, kind: ReactionKind) -> i64 {
        self.counts[Self::slot(kind)]
    }

    /// Total across all kinds
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts.iter().sum()
    }

    fn slot(kind: ReactionKind) -> usize {
        match kind {
            ReactionKind::Like => 0,
            ReactionKind::Sad => 1,
            ReactionKind::Angry => 2,
            ReactionKind::Surprised => 3,
            ReactionKind::Anxious => 4,
        }
    }
}
