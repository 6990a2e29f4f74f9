//! User Entity
//!
//! An account: identity, login name and password hash. Created once at
//! registration and never modified afterwards.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, user_name::UserName, user_password::UserPassword};

/// User entity
///
/// Holds the password hash, so it never leaves the crate as-is; responses
/// go through [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login name
    pub user_name: UserName,
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Projection of [`User`] without credential material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub user_id: UserId,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            user_id: self.user_id,
            user_name: self.user_name.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
