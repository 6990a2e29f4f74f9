//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::profile::{
    Education, Profile, ProfileFields, ProfileUpdate, Project, WorkExperience,
};

// ============================================================================
// Request
// ============================================================================

/// Profile body for create and update
///
/// There is no owner field: any `userId`/`ownerId` the client sends is
/// dropped along with every other unknown key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub education: Option<Vec<Education>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(default)]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

impl ProfileRequest {
    /// Full content for a new profile; absent lists start empty
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            place_of_birth: self.place_of_birth,
            nationality: self.nationality,
            education: self.education.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            projects: self.projects.unwrap_or_default(),
            work_experience: self.work_experience.unwrap_or_default(),
            hobbies: self.hobbies.unwrap_or_default(),
            goals: self.goals.unwrap_or_default(),
        }
    }

    pub fn into_update(self) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            place_of_birth: self.place_of_birth,
            nationality: self.nationality,
            education: self.education,
            skills: self.skills,
            projects: self.projects,
            work_experience: self.work_experience,
            hobbies: self.hobbies,
            goals: self.goals,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// A profile as seen by its owner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub owner_id: String,
    #[serde(flatten)]
    pub fields: ProfileFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.profile_id.to_string(),
            owner_id: profile.owner_id.to_string(),
            fields: profile.fields,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// A profile in the public listing; carries no owner id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummaryResponse {
    pub id: String,
    #[serde(flatten)]
    pub fields: ProfileFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileSummaryResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.profile_id.to_string(),
            fields: profile.fields,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    #[test]
    fn test_owner_fields_in_body_are_ignored() {
        let req: ProfileRequest = serde_json::from_value(serde_json::json!({
            "fullName": "Mallory",
            "userId": "someone-else",
            "ownerId": "someone-else"
        }))
        .unwrap();
        assert_eq!(req.full_name.as_deref(), Some("Mallory"));
    }

    #[test]
    fn test_absent_lists_become_empty_on_create() {
        let fields = ProfileRequest {
            full_name: Some("Alice A".into()),
            ..Default::default()
        }
        .into_fields();
        assert!(fields.skills.is_empty());
        assert!(fields.education.is_empty());
    }

    #[test]
    fn test_absent_fields_stay_absent_on_update() {
        let update = ProfileRequest {
            hobbies: Some(vec!["chess".into()]),
            ..Default::default()
        }
        .into_update();
        assert!(update.full_name.is_none());
        assert!(update.skills.is_none());
        assert_eq!(update.hobbies, Some(vec!["chess".to_string()]));
    }

    #[test]
    fn test_response_shapes() {
        let owner = UserId::new();
        let profile = Profile::new(
            owner,
            ProfileFields {
                full_name: Some("Alice A".into()),
                ..Default::default()
            },
        );

        let mine = serde_json::to_value(ProfileResponse::from(profile.clone())).unwrap();
        assert_eq!(mine["fullName"], "Alice A");
        assert_eq!(mine["ownerId"], owner.to_string());
        assert!(mine["workExperience"].is_array());

        let listed = serde_json::to_value(ProfileSummaryResponse::from(profile)).unwrap();
        assert_eq!(listed["fullName"], "Alice A");
        assert!(listed.get("ownerId").is_none());
    }
}
