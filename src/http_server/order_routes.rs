//! Order HTTP Routes
//!
//! Order listing, creation, and status updates. Creation and status
//! updates persist the whole document back through the store.

use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};
use super::ApiState;
use crate::observability::{Logger, Severity};
use crate::store::{format_order_id, Order, INITIAL_ORDER_STATUS, PAYMENT_METHOD};

// ==================
// Request Types
// ==================

/// Body of `POST /api/orders`. Every field is optional; absent fields get
/// the documented defaults. Items and customer details are copied verbatim,
/// no shape or range validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub customer_details: Map<String, Value>,
}

/// Body of `PUT /api/orders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    /// Optional so a missing key surfaces as BadRequest, not a parse error.
    pub status: Option<String>,
}

// ==================
// Order Routes
// ==================

/// Create order routes
pub fn order_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/orders", get(list_orders_handler))
        .route("/orders", post(create_order_handler))
        .route("/orders/{id}", get(get_order_handler))
        .route("/orders/{id}/status", put(update_order_status_handler))
        .with_state(state)
}

/// All orders, insertion order preserved.
async fn list_orders_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Order>>> {
    let doc = state.store.load()?;
    Ok(Json(doc.orders))
}

async fn get_order_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    let doc = state.store.load()?;
    let order = doc.order(&id).cloned().ok_or(ApiError::OrderNotFound)?;
    Ok(Json(order))
}

async fn create_order_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut doc = state.store.load()?;
    let seq = doc.next_order_seq();

    let order = Order {
        id: format_order_id(seq),
        items: request.items,
        total: request.total,
        status: INITIAL_ORDER_STATUS.to_string(),
        customer_details: request.customer_details,
        payment_method: PAYMENT_METHOD.to_string(),
        date: Local::now().format("%Y-%m-%d").to_string(),
    };

    doc.push_order(order.clone(), seq);
    state.store.save(&doc)?;

    Logger::log(
        Severity::Info,
        "order_created",
        &[("id", &order.id), ("total", &order.total.to_string())],
    );

    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_order_status_handler(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateOrderStatusRequest>, JsonRejection>,
) -> ApiResult<Json<Order>> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let status = request
        .status
        .ok_or_else(|| ApiError::BadRequest("No status provided".to_string()))?;

    let mut doc = state.store.load()?;
    let order = doc.order_mut(&id).ok_or(ApiError::OrderNotFound)?;
    // Status is the only mutable order field; the value is not checked
    // against any enumeration.
    order.status = status;
    let updated = order.clone();
    state.store.save(&doc)?;

    Logger::log(
        Severity::Info,
        "order_status_updated",
        &[("id", &updated.id), ("status", &updated.status)],
    );

    Ok(Json(updated))
}
