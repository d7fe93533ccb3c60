//! storefront - a minimal flat-file backend for an online shop
//!
//! Serves a product catalog, accepts orders, and reports basic sales
//! statistics. All state lives in a single JSON document on disk.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
