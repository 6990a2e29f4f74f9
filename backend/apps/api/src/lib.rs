//! API Application
//!
//! Router composition shared by the binary and the integration tests.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, AuthMiddlewareState, auth_router_generic};
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, routing::get};
use profile::domain::repository::ProfileRepository;
use profile::profile_router_generic;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Build the full HTTP application
///
/// Account routes (`/register`, `/login`, `/logout`) and profile routes
/// (`/profiles`, `/profiles/me`) share one [`AuthConfig`], so tokens issued
/// at login are the ones the gate accepts.
pub fn build_app<U, P>(
    users: U,
    profiles: P,
    auth_config: Arc<AuthConfig>,
    cors: CorsLayer,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: ProfileRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthMiddlewareState::new(auth_config.clone());

    Router::new()
        .route("/health", get(health))
        .merge(auth_router_generic(users, auth_config))
        .merge(profile_router_generic(profiles, gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS policy
///
/// With no allow-list every origin is accepted (bearer tokens travel in a
/// header, not a cookie, so credentials mode stays off).
pub fn cors_layer(origins: Option<&[HeaderValue]>) -> CorsLayer {
    let allow_origin = match origins {
        Some(list) => AllowOrigin::list(list.iter().cloned()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
