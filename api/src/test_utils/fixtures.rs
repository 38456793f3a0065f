//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::config::Config;
use crate::domain::entities::post::{PostContent, PostContentVariant, PostId};
use crate::domain::entities::{FeedConfig, PostRecord};

/// 2024-01-01T00:00:00Z
pub const TEST_PUBLISH_DATE: i64 = 1_704_067_200;

/// Create a feed config with recognizable values
pub fn test_feed_config() -> FeedConfig {
    FeedConfig {
        title: "Test Feed".to_string(),
        description: "A feed for tests".to_string(),
        feed_url: "https://feed.example.com".to_string(),
        author_email: "author@example.com".to_string(),
    }
}

/// Create a published post with every field populated
pub fn test_post(id: &str) -> PostRecord {
    PostRecord {
        id: Some(PostId::Text(id.to_string())),
        status: Some("confirmed".to_string()),
        publish_date: Some(TEST_PUBLISH_DATE),
        web_url: Some(format!("https://news.example.com/p/{}", id)),
        title: Some(format!("Post {}", id)),
        subtitle: Some(format!("Subtitle of {}", id)),
        content: Some(PostContent {
            free: Some(PostContentVariant {
                web: Some(format!("<p>Body of {}</p>", id)),
            }),
        }),
    }
}

/// Create a post with a specific status
pub fn test_post_with_status(id: &str, status: &str) -> PostRecord {
    PostRecord {
        status: Some(status.to_string()),
        ..test_post(id)
    }
}

/// Create a fully configured app config
pub fn test_config() -> Config {
    Config {
        beehiiv_api_key: Some("test-api-key".to_string()),
        beehiiv_publication_id: Some("pub_test".to_string()),
        beehiiv_api_url: "http://beehiiv.invalid/v2".to_string(),
        feed: test_feed_config(),
        port: 0,
    }
}
