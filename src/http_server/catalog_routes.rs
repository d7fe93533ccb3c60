//! Catalog HTTP Routes
//!
//! Read-only endpoints over the seeded product catalog.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use super::ApiState;
use crate::store::Product;

/// Create catalog routes
pub fn catalog_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/{id}", get(get_product_handler))
        .route("/products/category/{category}", get(list_category_handler))
        .route("/featured-products", get(list_featured_handler))
        .with_state(state)
}

/// All products, insertion order preserved.
async fn list_products_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let doc = state.store.load()?;
    Ok(Json(doc.products))
}

async fn get_product_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let doc = state.store.load()?;
    let product = doc.product(&id).cloned().ok_or(ApiError::ProductNotFound)?;
    Ok(Json(product))
}

/// Case-sensitive exact category match; empty result is not an error.
async fn list_category_handler(
    State(state): State<Arc<ApiState>>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Product>>> {
    let doc = state.store.load()?;
    Ok(Json(doc.products_in_category(&category)))
}

async fn list_featured_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let doc = state.store.load()?;
    Ok(Json(doc.featured_products()))
}
