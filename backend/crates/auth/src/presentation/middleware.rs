//! Auth Middleware
//!
//! The gate in front of protected routes. A request passes only with a
//! valid bearer token; the admitted identity is stored in request
//! extensions and read back through the [`AuthenticatedUser`] extractor.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{AuthenticateUseCase, AuthenticatedUser};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

impl AuthMiddlewareState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_auth(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let use_case = AuthenticateUseCase::new(state.config.clone());
    let caller = use_case.execute(extract_bearer_token(req.headers()))?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

/// Caller identity for handlers behind [`require_auth`]
///
/// On a route without the gate there is no identity, which is reported as
/// a missing credential.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .copied()
            .ok_or(AuthError::MissingCredential)
    }
}
