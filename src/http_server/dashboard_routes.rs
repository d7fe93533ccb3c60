//! Dashboard HTTP Routes
//!
//! Sales statistics for the admin dashboard, derived from the order book.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::errors::ApiResult;
use super::ApiState;
use crate::store::round2;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_revenue: f64,
    pub orders_count: usize,
    pub avg_order_value: f64,
    pub customers_count: usize,
    pub sales_data: Vec<SalesPoint>,
    pub category_stats: Vec<CategorySlice>,
}

/// One month of the revenue chart.
#[derive(Debug, Serialize)]
pub struct SalesPoint {
    pub name: &'static str,
    pub total: u32,
}

/// One slice of the category pie chart.
#[derive(Debug, Serialize)]
pub struct CategorySlice {
    pub name: &'static str,
    pub value: u32,
}

// Illustrative chart series. Presentation placeholders for the dashboard,
// not derived from the live dataset.
const SALES_DATA: [(&str, u32); 7] = [
    ("Jan", 1250),
    ("Feb", 1900),
    ("Mar", 2300),
    ("Apr", 3200),
    ("May", 2800),
    ("Jun", 3500),
    ("Jul", 4000),
];

const CATEGORY_STATS: [(&str, u32); 6] = [
    ("t-shirts", 35),
    ("pants", 25),
    ("dresses", 15),
    ("hoodies", 10),
    ("jackets", 8),
    ("accessories", 7),
];

// ==================
// Dashboard Routes
// ==================

/// Create dashboard routes
pub fn dashboard_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/dashboard/stats", get(get_stats_handler))
        .with_state(state)
}

async fn get_stats_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let doc = state.store.load()?;

    let orders_count = doc.orders.len();
    let total_revenue: f64 = doc.orders.iter().map(|o| o.total).sum();
    let avg_order_value = if orders_count > 0 {
        total_revenue / orders_count as f64
    } else {
        0.0
    };

    Ok(Json(DashboardStatsResponse {
        total_revenue: round2(total_revenue),
        orders_count,
        avg_order_value: round2(avg_order_value),
        // One customer per order, no customer accounts exist
        customers_count: orders_count,
        sales_data: SALES_DATA
            .iter()
            .map(|&(name, total)| SalesPoint { name, total })
            .collect(),
        category_stats: CATEGORY_STATS
            .iter()
            .map(|&(name, value)| CategorySlice { name, value })
            .collect(),
    }))
}
