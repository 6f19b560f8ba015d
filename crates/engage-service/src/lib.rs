//! # engage-service
//!
//! Application layer: the engagement engines and their plumbing.
//!
//! Each engine is a per-content-item state container over the repository
//! ports: it applies user actions against the store, absorbs or surfaces
//! failures according to the error taxonomy, and reconciles its local view
//! from store responses. Engines never block page rendering; every failure
//! degrades to "feature unavailable".

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use services::{
    CommentEngine, CommentPanel, CommentViewEntry, EngagementEngine, EngagementView,
    OperationGuard, OperationToken, PanelState, ReactionEngine, ReactionView, ServiceContext,
    ServiceResult, SingleSlotNotice,
};
