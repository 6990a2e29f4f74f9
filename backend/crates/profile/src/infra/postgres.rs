//! PostgreSQL Repository Implementation
//!
//! List-valued fields live in `jsonb` columns.

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::profile::{
    Education, Profile, ProfileFields, ProfileUpdate, Project, WorkExperience,
};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

const PROFILE_COLUMNS: &str = r#"
    profile_id,
    owner_id,
    full_name,
    date_of_birth,
    place_of_birth,
    nationality,
    education,
    skills,
    projects,
    work_experience,
    hobbies,
    goals,
    created_at,
    updated_at
"#;

/// Picks the owner's oldest profile; `$1` is the owner id
const OWNED_PROFILE: &str = r#"
    SELECT profile_id FROM profiles
    WHERE owner_id = $1
    ORDER BY created_at, profile_id
    LIMIT 1
"#;

/// PostgreSQL-backed profile store
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        let f = &profile.fields;

        sqlx::query(&format!(
            r#"
            INSERT INTO profiles ({PROFILE_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#
        ))
        .bind(profile.profile_id.as_uuid())
        .bind(profile.owner_id.as_uuid())
        .bind(&f.full_name)
        .bind(&f.date_of_birth)
        .bind(&f.place_of_birth)
        .bind(&f.nationality)
        .bind(Json(&f.education))
        .bind(Json(&f.skills))
        .bind(Json(&f.projects))
        .bind(Json(&f.work_experience))
        .bind(Json(&f.hobbies))
        .bind(Json(&f.goals))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE profile_id = ({OWNED_PROFILE})"
        ))
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn list_all(&self) -> ProfileResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at, profile_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProfileRow::into_profile).collect())
    }

    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        update: &ProfileUpdate,
        now: DateTime<Utc>,
    ) -> ProfileResult<Option<Profile>> {
        // NULL parameters keep the stored value
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            UPDATE profiles SET
                full_name       = COALESCE($2, full_name),
                date_of_birth   = COALESCE($3, date_of_birth),
                place_of_birth  = COALESCE($4, place_of_birth),
                nationality     = COALESCE($5, nationality),
                education       = COALESCE($6, education),
                skills          = COALESCE($7, skills),
                projects        = COALESCE($8, projects),
                work_experience = COALESCE($9, work_experience),
                hobbies         = COALESCE($10, hobbies),
                goals           = COALESCE($11, goals),
                updated_at      = $12
            WHERE profile_id = ({OWNED_PROFILE})
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(owner_id.as_uuid())
        .bind(&update.full_name)
        .bind(&update.date_of_birth)
        .bind(&update.place_of_birth)
        .bind(&update.nationality)
        .bind(update.education.as_ref().map(Json))
        .bind(update.skills.as_ref().map(Json))
        .bind(update.projects.as_ref().map(Json))
        .bind(update.work_experience.as_ref().map(Json))
        .bind(update.hobbies.as_ref().map(Json))
        .bind(update.goals.as_ref().map(Json))
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn delete_by_owner(&self, owner_id: &UserId) -> ProfileResult<bool> {
        let deleted = sqlx::query(&format!(
            "DELETE FROM profiles WHERE profile_id = ({OWNED_PROFILE})"
        ))
        .bind(owner_id.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    owner_id: Uuid,
    full_name: Option<String>,
    date_of_birth: Option<String>,
    place_of_birth: Option<String>,
    nationality: Option<String>,
    education: Json<Vec<Education>>,
    skills: Json<Vec<String>>,
    projects: Json<Vec<Project>>,
    work_experience: Json<Vec<WorkExperience>>,
    hobbies: Json<Vec<String>>,
    goals: Json<Vec<String>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            profile_id: ProfileId::from_uuid(self.profile_id),
            owner_id: UserId::from_uuid(self.owner_id),
            fields: ProfileFields {
                full_name: self.full_name,
                date_of_birth: self.date_of_birth,
                place_of_birth: self.place_of_birth,
                nationality: self.nationality,
                education: self.education.0,
                skills: self.skills.0,
                projects: self.projects.0,
                work_experience: self.work_experience.0,
                hobbies: self.hobbies.0,
                goals: self.goals.0,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
