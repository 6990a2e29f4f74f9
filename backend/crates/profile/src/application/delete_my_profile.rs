//! Delete My Profile Use Case

use std::sync::Arc;

use auth::AuthenticatedUser;

use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

pub struct DeleteMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    repo: Arc<P>,
}

impl<P> DeleteMyProfileUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: &AuthenticatedUser) -> ProfileResult<()> {
        if !self.repo.delete_by_owner(&caller.user_id).await? {
            return Err(ProfileError::NotFound);
        }

        tracing::info!(owner_id = %caller.user_id, "Profile deleted");

        Ok(())
    }
}
