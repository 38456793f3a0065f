//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod rss;

pub use rss::get_rss;
