//! Feed service
//!
//! Turns the publication's post listing into an RSS document.
//! One call validates configuration, fetches once, and renders.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::PostSource;
use crate::error::AppError;
use crate::feed::render_rss;

/// Service for generating the RSS feed
pub struct FeedService<S>
where
    S: PostSource,
{
    source: Arc<S>,
    config: Config,
}

impl<S> FeedService<S>
where
    S: PostSource,
{
    pub fn new(source: Arc<S>, config: Config) -> Self {
        Self { source, config }
    }

    /// Fetch the first page of posts and render it
    ///
    /// Missing credentials fail before the source is contacted.
    pub async fn generate_rss(&self) -> Result<String, AppError> {
        let credentials = self.config.credentials()?;

        tracing::info!(
            publication_id = %credentials.publication_id,
            "Fetching posts from Beehiiv"
        );
        let posts = self.source.list_posts(&credentials).await?;
        tracing::info!(count = posts.len(), "Fetched posts");

        let xml = render_rss(&posts, &self.config.feed)?;
        tracing::debug!(bytes = xml.len(), "Rendered RSS feed");

        Ok(xml)
    }
}
