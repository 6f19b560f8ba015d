//! Domain error types

mod engage_error;

pub use engage_error::EngageError;
