//! Beehiiv API client implementation

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::{BeehiivCredentials, PostRecord};
use crate::domain::ports::{PostSource, PostsResponse};
use crate::error::BeehiivError;

/// Implementation of the Beehiiv posts client
pub struct BeehiivClientImpl {
    http: Client,
    base_url: String,
}

impl BeehiivClientImpl {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self, publication_id: &str) -> String {
        format!(
            "{}/publications/{}/posts",
            self.base_url,
            encode(publication_id)
        )
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<PostsResponse, BeehiivError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BeehiivError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BeehiivError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PostSource for BeehiivClientImpl {
    async fn list_posts(
        &self,
        credentials: &BeehiivCredentials,
    ) -> Result<Vec<PostRecord>, BeehiivError> {
        let url = self.posts_url(&credentials.publication_id);
        tracing::debug!(%url, "Fetching posts from Beehiiv");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", credentials.api_key))
            .header(CONTENT_TYPE, "application/json")
            .header(
                USER_AGENT,
                concat!("beehiiv-rss-api/", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .await?;

        Ok(self.handle_response(response).await?.data)
    }
}
