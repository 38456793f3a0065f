//! RSS handler
//!
//! Serves the newsletter as an RSS 2.0 feed. The request itself is ignored:
//! any method, no query parameters, no body.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::ports::PostSource;
use crate::error::AppError;
use crate::AppState;

pub const RSS_CONTENT_TYPE: &str = "application/rss+xml; charset=utf-8";
pub const RSS_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// ANY /api/rss
///
/// Returns the rendered feed, or a JSON error body with status 500.
pub async fn get_rss<S>(State(state): State<AppState<S>>) -> Result<Response, AppError>
where
    S: PostSource + 'static,
{
    tracing::info!("Generating RSS feed");

    let xml = state.feed_service.generate_rss().await?;

    Ok((
        [
            (header::CONTENT_TYPE, RSS_CONTENT_TYPE),
            (header::CACHE_CONTROL, RSS_CACHE_CONTROL),
        ],
        xml,
    )
        .into_response())
}
