//! In-Memory Repository Implementation
//!
//! Profiles kept in creation order, so "the owner's profile" is the first
//! match. Each operation runs under a single lock acquisition.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::profile::{Profile, ProfileUpdate};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        self.profiles.write().await.push(profile.clone());
        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>> {
        let profiles = self.profiles.read().await;
        Ok(profiles.iter().find(|p| p.owner_id == *owner_id).cloned())
    }

    async fn list_all(&self) -> ProfileResult<Vec<Profile>> {
        Ok(self.profiles.read().await.clone())
    }

    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        update: &ProfileUpdate,
        now: DateTime<Utc>,
    ) -> ProfileResult<Option<Profile>> {
        let mut profiles = self.profiles.write().await;
        Ok(profiles
            .iter_mut()
            .find(|p| p.owner_id == *owner_id)
            .map(|profile| {
                profile.apply(update, now);
                profile.clone()
            }))
    }

    async fn delete_by_owner(&self, owner_id: &UserId) -> ProfileResult<bool> {
        let mut profiles = self.profiles.write().await;
        match profiles.iter().position(|p| p.owner_id == *owner_id) {
            Some(index) => {
                profiles.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
