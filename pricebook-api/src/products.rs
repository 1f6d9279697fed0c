use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pricebook_catalog::{Product, ProductFilter};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/products", get(list_products))
}

/// GET /api/v1/products?search=&category=&subCategory=&brand=&segment=
async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.list_products(&filter).await?;
    Ok(Json(products))
}
