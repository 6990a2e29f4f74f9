//! List Profiles Use Case
//!
//! Any authenticated caller may list every profile. Owner ids are not part
//! of the listing; the presentation layer renders it without them.

use std::sync::Arc;

use crate::domain::entity::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

pub struct ListProfilesUseCase<P>
where
    P: ProfileRepository,
{
    repo: Arc<P>,
}

impl<P> ListProfilesUseCase<P>
where
    P: ProfileRepository,
{
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ProfileResult<Vec<Profile>> {
        self.repo.list_all().await
    }
}
