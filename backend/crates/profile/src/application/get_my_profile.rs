//! Get My Profile Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

pub struct GetMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    repo: Arc<P>,
}

impl<P> GetMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &AuthenticatedUser) -> ProfileResult<Profile> {
        self.repo
            .find_by_owner(&caller.user_id)
            .await?
            .ok_or(ProfileError::NotFound)
    }
}
