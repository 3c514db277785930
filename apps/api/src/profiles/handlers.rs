//! Axum route handlers for the profile resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{NewProfile, ProfileRow, ProfileUpdate};
use crate::profiles::store;
use crate::state::AppState;

/// GET /profiles
pub async fn handle_list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let profiles = store::list_profiles(state.profiles.as_ref()).await?;
    Ok(Json(profiles))
}

/// GET /profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = store::get_profile(state.profiles.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    Ok(Json(profile))
}

/// POST /profiles
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(input): Json<NewProfile>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    let created = store::create_profile(state.profiles.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /profiles/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ProfileUpdate>,
) -> Result<Json<ProfileRow>, AppError> {
    let updated = store::update_profile(state.profiles.as_ref(), id, patch).await?;
    Ok(Json(updated))
}

/// DELETE /profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    store::delete_profile(state.profiles.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /profiles
pub async fn handle_delete_all_profiles(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    store::delete_all_profiles(state.profiles.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}
