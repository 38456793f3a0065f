//! Beehiiv RSS API Server
//!
//! Serves a Beehiiv publication's posts as an RSS 2.0 feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::BeehiivClientImpl;
use app::FeedService;
use config::Config;
use domain::ports::PostSource;

/// Application state shared across all handlers
pub struct AppState<S: PostSource> {
    pub feed_service: Arc<FeedService<S>>,
}

impl<S: PostSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

/// Build the router for a given post source
pub fn router<S>(state: AppState<S>) -> Router
where
    S: PostSource + 'static,
{
    Router::new()
        .route("/", any(handlers::get_rss::<S>))
        .route("/api/rss", any(handlers::get_rss::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,beehiiv_rss_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Beehiiv RSS API...");

    // Load configuration
    let config = Config::from_env();
    if config.credentials().is_err() {
        tracing::warn!(
            "BEEHIIV_API_KEY or BEEHIIV_PUBLICATION_ID is not set; requests will fail until configured"
        );
    }

    let beehiiv = Arc::new(BeehiivClientImpl::new(config.beehiiv_api_url.clone()));
    let port = config.port;

    let state = AppState {
        feed_service: Arc::new(FeedService::new(beehiiv, config)),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
