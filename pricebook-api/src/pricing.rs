use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use pricebook_catalog::{
    base_profile_options, calculate_prices_for_products, PriceAdjustment, PricedProduct,
    PricingProfile, ProductFilter, ProfileDraft,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::profiles::profile_not_found;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/pricing-profiles/{id}/prices", get(profile_prices))
        .route("/api/v1/pricing/preview", post(preview_prices))
        .route("/api/v1/pricing/base-options", get(base_options))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub price_adjustment: Option<PriceAdjustment>,
    /// Price only these products; the whole filtered catalog otherwise
    pub product_ids: Option<Vec<String>>,
    #[serde(default)]
    pub filter: ProductFilter,
}

/// GET /api/v1/pricing-profiles/{id}/prices
///
/// Prices the profile's selected products, or the filtered catalog when the
/// profile has no selection.
async fn profile_prices(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<PricedProduct>>, AppError> {
    let profiles = state.profiles.list_profiles().await?;
    let profile = profiles
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(profile_not_found)?;

    let products = if profile.selected_products.is_empty() {
        state.products.list_products(&filter).await?
    } else {
        let selected = state.products.get_products(&profile.selected_products).await?;
        filter.apply(&selected)
    };

    tracing::debug!(profile_id = %id, count = products.len(), "Pricing products for profile");
    Ok(Json(calculate_prices_for_products(&products, Some(profile), &profiles)))
}

/// POST /api/v1/pricing/preview
///
/// Prices an adjustment that has not been saved yet against the current
/// set of profiles.
async fn preview_prices(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<Vec<PricedProduct>>, AppError> {
    let profiles = state.profiles.list_profiles().await?;

    let products = match &req.product_ids {
        Some(ids) => {
            let selected = state.products.get_products(ids).await?;
            req.filter.apply(&selected)
        }
        None => state.products.list_products(&req.filter).await?,
    };

    let preview: PricingProfile = ProfileDraft {
        name: Some("Preview".to_string()),
        price_adjustment: req.price_adjustment,
        ..Default::default()
    }
    .into_profile("preview", Utc::now())
    .map_err(pricebook_core::CoreError::from)?;

    Ok(Json(calculate_prices_for_products(&products, Some(&preview), &profiles)))
}

/// GET /api/v1/pricing/base-options
///
/// Profiles a new adjustment can be based on.
async fn base_options(
    State(state): State<AppState>,
) -> Result<Json<Vec<PricingProfile>>, AppError> {
    let profiles = state.profiles.list_profiles().await?;
    Ok(Json(base_profile_options(&profiles).into_iter().cloned().collect()))
}
