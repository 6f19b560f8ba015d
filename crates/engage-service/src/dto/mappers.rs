//! Engine view to response DTO conversions

use engage_core::{AuthorProfile, ReactionKind};

use crate::services::{CommentViewEntry, EngagementView, ReactionView};

use super::responses::{AuthorResponse, CommentResponse, EngagementResponse, ReactionSummary};

impl From<AuthorProfile> for AuthorResponse {
    fn from(profile: AuthorProfile) -> Self {
        Self {
            id: profile.user_id.to_string(),
            display_name: profile.display_name,
            avatar_url: profile.avatar_url,
        }
    }
}

impl From<CommentViewEntry> for CommentResponse {
    fn from(entry: CommentViewEntry) -> Self {
        Self {
            id: entry.comment.id.to_string(),
            author: entry.author.map(AuthorResponse::from),
            content: entry.comment.content,
            like_count: entry.comment.like_count,
            liked_by_me: entry.liked_by_me,
            created_at: entry.comment.created_at,
        }
    }
}

impl From<ReactionView> for ReactionSummary {
    fn from(view: ReactionView) -> Self {
        Self {
            like: view.tally.count(ReactionKind::Like),
            sad: view.tally.count(ReactionKind::Sad),
            angry: view.tally.count(ReactionKind::Angry),
            surprised: view.tally.count(ReactionKind::Surprised),
            anxious: view.tally.count(ReactionKind::Anxious),
            mine: view.mine.map(|kind| kind.as_str().to_string()),
        }
    }
}

impl From<EngagementView> for EngagementResponse {
    fn from(view: EngagementView) -> Self {
        Self {
            liked: view.like.is_on(),
            bookmarked: view.bookmark.is_on(),
            like_count: view.counters.like_count,
            comment_count: view.counters.comment_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::{Comment, ContentId, ReactionTally, UserId};
    use crate::services::ReactionView;

    #[test]
    fn test_reaction_summary_from_view() {
        let view = ReactionView {
            tally: ReactionTally::from_kinds([ReactionKind::Sad, ReactionKind::Sad]),
            mine: Some(ReactionKind::Sad),
        };
        let summary = ReactionSummary::from(view);
        assert_eq!(summary.sad, 2);
        assert_eq!(summary.like, 0);
        assert_eq!(summary.mine.as_deref(), Some("sad"));
    }

    #[test]
    fn test_comment_response_from_entry() {
        let author = UserId::generate();
        let entry = crate::services::CommentViewEntry {
            comment: Comment::new(ContentId::generate(), author, "hello".to_string()),
            author: Some(AuthorProfile::new(author, "Dana")),
            liked_by_me: true,
        };
        let response = CommentResponse::from(entry);
        assert_eq!(response.content, "hello");
        assert!(response.liked_by_me);
        assert_eq!(response.author.unwrap().display_name, "Dana");
    }
}
