//! # engage-common
//!
//! Shared utilities: configuration, error handling, session identity, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{AnonymousIdentity, Claims, JwtIdentity};
pub use config::{AppConfig, AppSettings, AuthConfig, ConfigError, DatabaseConfig, Environment, NoticeConfig};
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig, TracingError};
