//! Post source port trait
//!
//! Defines the interface for fetching newsletter posts from the upstream provider.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::domain::entities::{BeehiivCredentials, PostRecord};
use crate::error::BeehiivError;

/// Helper to deserialize the post list: null means empty, and entries that
/// are not post objects are skipped instead of failing the whole page
fn deserialize_posts<'de, D>(deserializer: D) -> Result<Vec<PostRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| PostRecord::deserialize(value).ok())
        .collect())
}

/// Body of the posts listing; only the first page is ever read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsResponse {
    #[serde(default, deserialize_with = "deserialize_posts")]
    pub data: Vec<PostRecord>,
}

/// Port trait for listing posts
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the first page of posts for a publication
    async fn list_posts(
        &self,
        credentials: &BeehiivCredentials,
    ) -> Result<Vec<PostRecord>, BeehiivError>;
}
