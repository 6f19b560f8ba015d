//! JWT-backed identity provider
//!
//! Validates session tokens (HS256) from the managed auth backend and holds
//! the resulting user id for the lifetime of the session. Validation only:
//! this layer never mints tokens.

use jsonwebtoken::{decode, DecodingKey, Validation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use engage_core::{IdentityProvider, UserId};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the user ID from the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse::<UserId>().map_err(|_| AppError::InvalidToken)
    }
}

/// Identity provider backed by a validated session token
pub struct JwtIdentity {
    decoding_key: DecodingKey,
    session: RwLock<Option<UserId>>,
}

impl JwtIdentity {
    /// Create a provider with no active session
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session: RwLock::new(None),
        }
    }

    /// Validate a session token and install the identity it carries
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired; the previous
    /// session, if any, is left untouched on failure.
    pub fn sign_in(&self, token: &str) -> Result<UserId, AppError> {
        let claims = self.decode(token)?;
        let user_id = claims.user_id()?;
        *self.session.write() = Some(user_id);
        Ok(user_id)
    }

    /// Clear the active session
    pub fn sign_out(&self) {
        *self.session.write() = None;
    }

    fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;
        Ok(token_data.claims)
    }
}

impl IdentityProvider for JwtIdentity {
    fn current_user(&self) -> Option<UserId> {
        *self.session.read()
    }
}

/// Identity provider for anonymous visitors - always reports no user
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentity;

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<UserId> {
        None
    }
}
