//! Sign In Use Case
//!
//! Verifies a user's password and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{UserId, user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

pub struct SignInOutput {
    /// Signed bearer token whose subject is `user_id`
    pub access_token: String,
    pub user_id: UserId,
}

pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Only presence is checked on the way in; registration limits do not
    /// apply here, so an over-long username or password is simply a miss.
    ///
    /// ## Errors
    /// - `InvalidInput` - username or password missing
    /// - `UserNotFound` - no account with that username
    /// - `InvalidCredentials` - password does not match
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user_name = UserName::for_lookup(input.user_name.unwrap_or_default())?;
        let raw_password = RawPassword::for_verification(input.password.unwrap_or_default())?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let Some(raw_password) = raw_password else {
            tracing::warn!(user_id = %user.user_id, "Oversize password on sign in");
            return Err(AuthError::InvalidCredentials);
        };

        let config = self.config.clone();
        let password_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))?;

        if !password_valid {
            tracing::warn!(user_id = %user.user_id, "Password mismatch on sign in");
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.config.tokens.issue(&user.user_id.to_string())?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            access_token,
            user_id: user.user_id,
        })
    }
}
