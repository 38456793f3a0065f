use std::env;

use crate::domain::entities::{BeehiivCredentials, FeedConfig};
use crate::error::AppError;

pub const DEFAULT_BEEHIIV_API_URL: &str = "https://api.beehiiv.com/v2";
pub const DEFAULT_FEED_TITLE: &str = "Newsletter";
pub const DEFAULT_FEED_DESCRIPTION: &str = "Latest posts from our newsletter";
pub const DEFAULT_FEED_URL: &str = "https://example.com";
pub const DEFAULT_AUTHOR_EMAIL: &str = "newsletter@example.com";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct Config {
    /// Beehiiv API key (required per request, not at startup)
    pub beehiiv_api_key: Option<String>,
    /// Beehiiv publication identifier (required per request, not at startup)
    pub beehiiv_publication_id: Option<String>,
    /// Base URL of the Beehiiv v2 API
    pub beehiiv_api_url: String,
    pub feed: FeedConfig,
    pub port: u16,
}

// Keep the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "beehiiv_api_key",
                &self.beehiiv_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("beehiiv_publication_id", &self.beehiiv_publication_id)
            .field("beehiiv_api_url", &self.beehiiv_api_url)
            .field("feed", &self.feed)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            beehiiv_api_key: lookup("BEEHIIV_API_KEY").filter(|v| !v.is_empty()),
            beehiiv_publication_id: lookup("BEEHIIV_PUBLICATION_ID").filter(|v| !v.is_empty()),
            beehiiv_api_url: or_default("BEEHIIV_API_URL", DEFAULT_BEEHIIV_API_URL),
            feed: FeedConfig {
                title: or_default("FEED_TITLE", DEFAULT_FEED_TITLE),
                description: or_default("FEED_DESCRIPTION", DEFAULT_FEED_DESCRIPTION),
                feed_url: or_default("FEED_URL", DEFAULT_FEED_URL),
                author_email: or_default("AUTHOR_EMAIL", DEFAULT_AUTHOR_EMAIL),
            },
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    /// Required Beehiiv values, or a configuration error naming both variables
    pub fn credentials(&self) -> Result<BeehiivCredentials, AppError> {
        match (&self.beehiiv_api_key, &self.beehiiv_publication_id) {
            (Some(api_key), Some(publication_id)) => Ok(BeehiivCredentials {
                api_key: api_key.clone(),
                publication_id: publication_id.clone(),
            }),
            _ => Err(AppError::Configuration(
                "BEEHIIV_API_KEY and BEEHIIV_PUBLICATION_ID environment variables are required"
                    .to_string(),
            )),
        }
    }
}
