//! # engage-store
//!
//! Store layer implementing the repository ports from `engage-core`.
//!
//! ## Overview
//!
//! Two implementations are provided:
//!
//! - PostgreSQL via SQLx (`repositories` module): connection pool
//!   management, row models with `FromRow` derives, entity ↔ model mappers,
//!   and the mapping of backend failures into the engagement error taxonomy
//!   (duplicate key, permission denied, relation missing, network).
//! - In-memory (`memory` module): a DashMap-backed store with the same
//!   uniqueness behavior plus fault injection, used by tests and local
//!   development.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use engage_store::pool::{create_pool, DatabaseConfig};
//! use engage_store::repositories::PgReactionRepository;
//! use engage_core::ReactionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let reactions = PgReactionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentLikeRepository, PgCommentRepository, PgEngagementRepository, PgProfileRepository,
    PgReactionRepository,
};
