//! # Storefront HTTP Server Module
//!
//! HTTP/JSON surface of the storefront backend.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/products*` - Product catalog (read-only)
//! - `/api/featured-products` - Featured subset of the catalog
//! - `/api/orders*` - Order listing, creation, status updates
//! - `/api/dashboard/stats` - Sales statistics

pub mod catalog_routes;
pub mod config;
pub mod dashboard_routes;
pub mod errors;
pub mod order_routes;
pub mod server;

use std::sync::Arc;

use crate::store::Store;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;

/// State shared by all handlers: the injected store backend.
pub struct ApiState {
    pub store: Arc<dyn Store>,
}
