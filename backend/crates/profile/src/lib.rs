//! Profile Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Profile entity, owner-keyed repository trait
//! - `application/` - Ownership-scoped use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! The owner of a profile is the identity admitted by `auth::require_auth`.
//! Reads and writes of a single profile are keyed by that identity only, so
//! one user's token can never reach another user's profile.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ProfileError, ProfileResult};
pub use infra::{InMemoryProfileRepository, PgProfileRepository};
pub use presentation::router::{profile_router, profile_router_generic};

pub mod models {
    pub use crate::domain::entity::profile::*;
    pub use crate::presentation::dto::*;
}
