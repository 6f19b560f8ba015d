//! Identity port - supplies the current authenticated user, or none

use crate::value_objects::UserId;

/// Source of the current session's identity
///
/// Engines resolve the user through this port before touching the store and
/// refuse with `AuthRequired` when it returns `None`; the redirect to the
/// authentication flow belongs to the caller, never to an engine.
pub trait IdentityProvider: Send + Sync {
    /// The authenticated user id, if a session exists
    fn current_user(&self) -> Option<UserId>;
}
