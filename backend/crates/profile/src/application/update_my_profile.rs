//! Update My Profile Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;
use chrono::Utc;

use crate::domain::entity::profile::{Profile, ProfileUpdate};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

pub struct UpdateMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    repo: Arc<P>,
}

impl<P> UpdateMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Merge `update` into the caller's profile
    ///
    /// ## Returns
    /// The profile as stored after the update
    ///
    /// ## Errors
    /// `NotFound` when the caller has no profile
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        update: ProfileUpdate,
    ) -> ProfileResult<Profile> {
        let profile = self
            .repo
            .update_by_owner(&caller.user_id, &update, Utc::now())
            .await?
            .ok_or(ProfileError::NotFound)?;

        tracing::info!(
            profile_id = %profile.profile_id,
            owner_id = %profile.owner_id,
            "Profile updated"
        );

        Ok(profile)
    }
}
