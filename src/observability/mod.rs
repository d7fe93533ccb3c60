//! # Observability Module
//!
//! Structured logging for server lifecycle and request outcomes.

pub mod logger;

pub use logger::{Logger, Severity};
