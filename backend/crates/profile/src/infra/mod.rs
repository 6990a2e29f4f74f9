//! Infrastructure Layer
//!
//! Store implementations of the profile repository.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProfileRepository;
pub use postgres::PgProfileRepository;
