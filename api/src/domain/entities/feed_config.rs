//! Feed configuration entities
//!
//! Resolved once at the process boundary and handed to the renderer.

/// Channel-level values used to render one feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub title: String,
    pub description: String,
    pub feed_url: String,
    pub author_email: String,
}

/// Values required to call the Beehiiv posts endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct BeehiivCredentials {
    pub api_key: String,
    pub publication_id: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for BeehiivCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeehiivCredentials")
            .field("api_key", &"<redacted>")
            .field("publication_id", &self.publication_id)
            .finish()
    }
}
