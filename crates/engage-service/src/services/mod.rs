//! Engagement engines and shared service plumbing

mod comment;
mod context;
mod engagement;
mod error;
mod guard;
mod notify;
mod reaction;

pub use comment::{CommentEngine, CommentPanel, CommentViewEntry, PanelState};
pub use context::ServiceContext;
pub use engagement::{EngagementEngine, EngagementView};
pub use error::{notice_for, ServiceResult};
pub use guard::{OperationGuard, OperationToken};
pub use notify::SingleSlotNotice;
pub use reaction::{ReactionEngine, ReactionView};
