//! Profile Entity
//!
//! A user's résumé-style record. The owner is stamped once at creation from
//! the authenticated caller and is never taken from request data.
//!
//! Dates inside a profile are opaque strings: they are stored and returned
//! exactly as the client sent them.

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sub-records
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

// ============================================================================
// Fields
// ============================================================================

/// Client-writable profile content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub work_experience: Vec<WorkExperience>,
    pub hobbies: Vec<String>,
    pub goals: Vec<String>,
}

/// Partial update: `Some` overwrites, `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub education: Option<Vec<Education>>,
    pub skills: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub hobbies: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// Merge into `fields`
    pub fn apply_to(&self, fields: &mut ProfileFields) {
        fn merge<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }
        fn merge_opt(target: &mut Option<String>, value: &Option<String>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }

        merge_opt(&mut fields.full_name, &self.full_name);
        merge_opt(&mut fields.date_of_birth, &self.date_of_birth);
        merge_opt(&mut fields.place_of_birth, &self.place_of_birth);
        merge_opt(&mut fields.nationality, &self.nationality);
        merge(&mut fields.education, &self.education);
        merge(&mut fields.skills, &self.skills);
        merge(&mut fields.projects, &self.projects);
        merge(&mut fields.work_experience, &self.work_experience);
        merge(&mut fields.hobbies, &self.hobbies);
        merge(&mut fields.goals, &self.goals);
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub profile_id: ProfileId,
    /// Set at creation from the authenticated caller; immutable
    pub owner_id: UserId,
    pub fields: ProfileFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(owner_id: UserId, fields: ProfileFields) -> Self {
        let now = Utc::now();

        Self {
            profile_id: ProfileId::new(),
            owner_id,
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place. The owner is untouched.
    pub fn apply(&mut self, update: &ProfileUpdate, now: DateTime<Utc>) {
        update.apply_to(&mut self.fields);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ProfileFields {
        ProfileFields {
            full_name: Some("Alice A".into()),
            nationality: Some("NL".into()),
            skills: vec!["rust".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_new_profile_is_owned() {
        let owner = UserId::new();
        let profile = Profile::new(owner, sample_fields());
        assert_eq!(profile.owner_id, owner);
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn test_update_merges_present_fields_only() {
        let owner = UserId::new();
        let mut profile = Profile::new(owner, sample_fields());
        let later = profile.updated_at + chrono::Duration::seconds(5);

        profile.apply(
            &ProfileUpdate {
                full_name: Some("Alice B".into()),
                hobbies: Some(vec!["chess".into()]),
                ..Default::default()
            },
            later,
        );

        assert_eq!(profile.fields.full_name.as_deref(), Some("Alice B"));
        assert_eq!(profile.fields.nationality.as_deref(), Some("NL"));
        assert_eq!(profile.fields.skills, vec!["rust".to_string()]);
        assert_eq!(profile.fields.hobbies, vec!["chess".to_string()]);
        assert_eq!(profile.owner_id, owner);
        assert_eq!(profile.updated_at, later);
    }

    #[test]
    fn test_update_can_clear_lists() {
        let mut fields = sample_fields();
        ProfileUpdate {
            skills: Some(Vec::new()),
            ..Default::default()
        }
        .apply_to(&mut fields);
        assert!(fields.skills.is_empty());
    }

    #[test]
    fn test_sub_record_wire_shape() {
        let json = serde_json::json!({
            "school": "TU Delft",
            "degree": "MSc",
            "startDate": "2015-09-01",
            "unknown": true
        });
        let education: Education = serde_json::from_value(json).unwrap();
        assert_eq!(education.start_date.as_deref(), Some("2015-09-01"));
        assert!(education.end_date.is_none());

        let back = serde_json::to_value(&education).unwrap();
        assert_eq!(back["startDate"], "2015-09-01");
    }
}
