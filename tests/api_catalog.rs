//! Catalog API Tests
//!
//! Exercises the read-only product endpoints against the seed catalog,
//! driving the real router with in-process requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use storefront::http_server::HttpServer;
use storefront::store::MemoryStore;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn seeded_router() -> Router {
    HttpServer::new(Arc::new(MemoryStore::seeded())).router()
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn list_products_returns_seed_in_insertion_order() {
    let router = seeded_router();
    let (status, body) = get(&router, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[1]["id"], "2");
    // Wire format is camelCase
    assert_eq!(products[0]["inStock"], true);
    assert!(products[0].get("discountedPrice").is_none());
    assert_eq!(products[1]["discountedPrice"], 39.99);
}

#[tokio::test]
async fn get_product_by_id() {
    let router = seeded_router();
    let (status, body) = get(&router, "/api/products/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Slim Fit Jeans");
    assert_eq!(body["price"], 49.99);
}

#[tokio::test]
async fn unknown_product_is_404_with_error_body() {
    let router = seeded_router();
    let (status, body) = get(&router, "/api/products/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
    assert_eq!(body["code"], 404);
}

// =============================================================================
// Category Filter
// =============================================================================

#[tokio::test]
async fn category_filter_matches_exactly() {
    let router = seeded_router();
    let (status, body) = get(&router, "/api/products/category/t-shirts").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Classic White T-Shirt");
}

#[tokio::test]
async fn category_filter_is_case_sensitive_and_empty_is_ok() {
    let router = seeded_router();

    let (status, body) = get(&router, "/api/products/category/T-Shirts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, body) = get(&router, "/api/products/category/shoes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

// =============================================================================
// Featured Products
// =============================================================================

#[tokio::test]
async fn featured_products_returns_both_seeded_products() {
    let router = seeded_router();
    let (status, body) = get(&router, "/api/featured-products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// =============================================================================
// Ambient Surface
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_version() {
    let router = seeded_router();
    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let router = seeded_router();
    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header("origin", "https://shop.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
