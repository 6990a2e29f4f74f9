//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::profile::{Profile, ProfileFields, ProfileUpdate};
pub use repository::ProfileRepository;
