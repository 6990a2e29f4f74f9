//! Profile Router

use auth::{AuthMiddlewareState, require_auth};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the Profile router with PostgreSQL repository
pub fn profile_router(repo: PgProfileRepository, gate: AuthMiddlewareState) -> Router {
    profile_router_generic(repo, gate)
}

/// Create a generic Profile router for any repository implementation
///
/// All routes require a valid bearer token.
pub fn profile_router_generic<R>(repo: R, gate: AuthMiddlewareState) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/profiles",
            get(handlers::list_profiles::<R>).post(handlers::create_profile::<R>),
        )
        .route(
            "/profiles/me",
            get(handlers::get_my_profile::<R>)
                .put(handlers::update_my_profile::<R>)
                .delete(handlers::delete_my_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth))
        .with_state(state)
}
