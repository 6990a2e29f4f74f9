//! HTTP Handlers
//!
//! Every handler sits behind the auth gate and takes the caller from
//! [`AuthenticatedUser`], never from the request body.

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::{
    CreateProfileUseCase, DeleteMyProfileUseCase, GetMyProfileUseCase, ListProfilesUseCase,
    UpdateMyProfileUseCase,
};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;
use crate::presentation::dto::{
    MessageResponse, ProfileRequest, ProfileResponse, ProfileSummaryResponse,
};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// POST /profiles
pub async fn create_profile<R>(
    State(state): State<ProfileAppState<R>>,
    caller: AuthenticatedUser,
    Json(req): Json<ProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&caller, req.into_fields()).await?;
    Ok(Json(profile.into()))
}

/// GET /profiles/me
pub async fn get_my_profile<R>(
    State(state): State<ProfileAppState<R>>,
    caller: AuthenticatedUser,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetMyProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&caller).await?;
    Ok(Json(profile.into()))
}

/// GET /profiles
pub async fn list_profiles<R>(
    State(state): State<ProfileAppState<R>>,
    _caller: AuthenticatedUser,
) -> ProfileResult<Json<Vec<ProfileSummaryResponse>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListProfilesUseCase::new(state.repo.clone());
    let profiles = use_case.execute().await?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// PUT /profiles/me
pub async fn update_my_profile<R>(
    State(state): State<ProfileAppState<R>>,
    caller: AuthenticatedUser,
    Json(req): Json<ProfileRequest>,
) -> ProfileResult<Json<ProfileResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateMyProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&caller, req.into_update()).await?;
    Ok(Json(profile.into()))
}

/// DELETE /profiles/me
pub async fn delete_my_profile<R>(
    State(state): State<ProfileAppState<R>>,
    caller: AuthenticatedUser,
) -> ProfileResult<Json<MessageResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteMyProfileUseCase::new(state.repo.clone());
    use_case.execute(&caller).await?;
    Ok(Json(MessageResponse {
        message: "Profile deleted".to_string(),
    }))
}
