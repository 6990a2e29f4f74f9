//! Sign Out Use Case
//!
//! Tokens are stateless, so there is nothing to delete server-side. Signing
//! out confirms the caller presented a valid token; the client discards it.

use crate::application::authenticate::AuthenticatedUser;
use crate::error::AuthResult;

#[derive(Debug, Default, Clone, Copy)]
pub struct SignOutUseCase;

impl SignOutUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Acknowledge the sign out of an already-authenticated caller
    pub fn execute(&self, caller: &AuthenticatedUser) -> AuthResult<()> {
        tracing::info!(user_id = %caller.user_id, "User signed out");
        Ok(())
    }
}
