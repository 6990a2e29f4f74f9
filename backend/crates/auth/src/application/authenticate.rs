//! Authenticate Use Case
//!
//! The request gate: turns a presented bearer token into the caller's
//! identity, or refuses. Holds no state between requests.

use std::sync::Arc;

use platform::bearer::BearerCredential;

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Identity admitted by the gate
///
/// The only trusted answer to "who is calling". Request bodies never
/// override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

#[derive(Clone)]
pub struct AuthenticateUseCase {
    config: Arc<AuthConfig>,
}

impl AuthenticateUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// ## Arguments
    /// * `presented` - what the request's `Authorization` header carried
    ///
    /// ## Errors
    /// - `MissingCredential` - no token presented
    /// - `InvalidToken` - a header that is not a single bearer credential,
    ///   bad signature, malformed, foreign algorithm, expired, or a subject
    ///   that is not a user id
    pub fn execute(&self, presented: BearerCredential<'_>) -> AuthResult<AuthenticatedUser> {
        let token = match presented {
            BearerCredential::Present(token) => token,
            BearerCredential::Absent => return Err(AuthError::MissingCredential),
            BearerCredential::Unusable => {
                tracing::warn!("Authorization header is not a bearer credential");
                return Err(AuthError::InvalidToken);
            }
        };

        let subject = self.config.tokens.verify(token).map_err(|reason| {
            tracing::warn!(reason = %reason, "Bearer token rejected");
            AuthError::InvalidToken
        })?;

        let user_id = subject.parse::<UserId>().map_err(|_| {
            tracing::warn!("Bearer token subject is not a user id");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser { user_id })
    }
}
