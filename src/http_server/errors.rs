//! # API Errors
//!
//! Error types for the HTTP surface. Every error becomes a JSON body with
//! an `error` message and the HTTP status code it was served with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::{Logger, Severity};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Missing or unparseable request body
    #[error("{0}")]
    BadRequest(String),

    /// Product lookup miss
    #[error("Product not found")]
    ProductNotFound,

    /// Order lookup miss
    #[error("Order not found")]
    OrderNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Persistence failure; corruption is fatal for the request
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::OrderNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
            code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            Logger::log_stderr(
                Severity::Error,
                "request_failed",
                &[("reason", &self.to_string())],
            );
        }
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::BadRequest("no data provided".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::ProductNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::OrderNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::corruption("x.json", "bad")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_body_carries_error_and_code() {
        let body = ErrorResponse::from(&ApiError::OrderNotFound);
        assert_eq!(body.error, "Order not found");
        assert_eq!(body.code, 404);
    }
}
