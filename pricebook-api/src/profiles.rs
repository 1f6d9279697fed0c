use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pricebook_catalog::{PricingProfile, ProfileDraft, ProfilePatch};
use pricebook_core::CoreError;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/pricing-profiles", get(list_profiles).post(create_profile))
        .route(
            "/api/v1/pricing-profiles/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

pub(crate) fn profile_not_found() -> AppError {
    CoreError::NotFound("Pricing profile".to_string()).into()
}

async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<PricingProfile>>, AppError> {
    Ok(Json(state.profiles.list_profiles().await?))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PricingProfile>, AppError> {
    let profile = state
        .profiles
        .get_profile(&id)
        .await?
        .ok_or_else(profile_not_found)?;
    Ok(Json(profile))
}

async fn create_profile(
    State(state): State<AppState>,
    Json(draft): Json<ProfileDraft>,
) -> Result<(StatusCode, Json<PricingProfile>), AppError> {
    let profile = state.profiles.create_profile(draft).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<PricingProfile>, AppError> {
    let profile = state
        .profiles
        .update_profile(&id, patch)
        .await?
        .ok_or_else(profile_not_found)?;
    Ok(Json(profile))
}

async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.profiles.delete_profile(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(profile_not_found())
    }
}
