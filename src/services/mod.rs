//! External service interactions
//!
//! This module contains services for interacting with external systems:
//! - The dashboard REST API (trait + HTTP client)
//! - Schema export to disk

pub mod api;
pub mod export;
pub mod http;

pub use api::DashboardApi;
pub use export::write_schema;
pub use http::HttpDashboardApi;
