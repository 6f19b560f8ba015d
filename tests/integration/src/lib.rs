//! Integration test utilities for the engagement layer
//!
//! The engines run against the in-memory store, which implements the same
//! repository ports and failure modes as the PostgreSQL store, so every
//! scenario here exercises real engine logic end to end.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
