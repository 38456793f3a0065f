//! Unified error types for the RSS API
//!
//! This module defines error types for each layer:
//! - `BeehiivError`: Beehiiv API client errors
//! - `RenderError`: feed rendering errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

/// Beehiiv API client errors
#[derive(Debug, Error)]
pub enum BeehiivError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Beehiiv API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Errors raised while turning posts into RSS
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid publish date: {0}")]
    InvalidTimestamp(i64),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required configuration: {0}")]
    Configuration(String),

    #[error("{0}")]
    Beehiiv(#[from] BeehiivError),

    #[error("{0}")]
    Render(#[from] RenderError),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                ErrorResponse {
                    error: "Missing required configuration".to_string(),
                    details: msg.clone(),
                    timestamp: None,
                }
            }
            AppError::Beehiiv(_) | AppError::Render(_) => {
                tracing::error!("Error generating RSS feed: {}", self);
                ErrorResponse {
                    error: "Failed to generate RSS feed".to_string(),
                    details: self.to_string(),
                    timestamp: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
                }
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
