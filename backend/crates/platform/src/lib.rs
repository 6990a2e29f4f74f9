//! Platform Crate - Technical Infrastructure
//!
//! Credential primitives with no knowledge of users or profiles:
//! - Password hashing (Argon2id, tunable work factor)
//! - Signed bearer tokens (HS256 JWT, optional expiry)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod password;
pub mod token;
