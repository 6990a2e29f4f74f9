//! Shared Kernel - vocabulary shared by every backend crate
//!
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - Typed identifiers for users and profiles
//!
//! Anything placed here must mean the same thing in the account and the
//! profile contexts.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
