//! Create Profile Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::domain::entity::profile::{Profile, ProfileFields};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

pub struct CreateProfileUseCase<P>
where
    P: ProfileRepository,
{
    repo: Arc<P>,
}

impl<P> CreateProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    /// Create a profile owned by `caller`
    ///
    /// Not idempotent: every call inserts a new record.
    pub async fn execute(
        &self,
        caller: &AuthenticatedUser,
        fields: ProfileFields,
    ) -> ProfileResult<Profile> {
        let profile = Profile::new(caller.user_id, fields);

        self.repo.create(&profile).await?;

        tracing::info!(
            profile_id = %profile.profile_id,
            owner_id = %profile.owner_id,
            "Profile created"
        );

        Ok(profile)
    }
}
