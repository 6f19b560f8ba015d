//! Session identity
//!
//! Sessions are issued by the managed auth backend; this layer validates
//! the bearer token and exposes the resulting identity to the engines.

mod session;

pub use session::{AnonymousIdentity, Claims, JwtIdentity};
