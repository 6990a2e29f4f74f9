//! Repository Traits
//!
//! Every operation that touches a single profile is keyed by owner. There is
//! no lookup by profile id, so a caller can only ever reach their own record.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::profile::{Profile, ProfileUpdate};
use crate::error::ProfileResult;

/// Profile repository trait
///
/// An owner may hold more than one profile; the "mine" operations act on
/// the oldest one.
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn create(&self, profile: &Profile) -> ProfileResult<()>;

    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>>;

    /// All profiles, oldest first
    async fn list_all(&self) -> ProfileResult<Vec<Profile>>;

    /// Merge `update` into the owner's profile in one atomic write
    ///
    /// ## Returns
    /// The profile after the update, or `None` if the owner has none
    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        update: &ProfileUpdate,
        now: DateTime<Utc>,
    ) -> ProfileResult<Option<Profile>>;

    /// ## Returns
    /// `true` if a profile was deleted
    async fn delete_by_owner(&self, owner_id: &UserId) -> ProfileResult<bool>;
}
