//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record calls so tests can verify whether the upstream was contacted.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{BeehiivCredentials, PostRecord};
use crate::domain::ports::PostSource;
use crate::error::BeehiivError;

// ============================================================================
// Mock Post Source
// ============================================================================

enum MockOutcome {
    Posts(Vec<PostRecord>),
    ApiError { status: u16, message: String },
}

pub struct MockPostSource {
    outcome: MockOutcome,
    /// Credentials of every call, in order
    pub calls: Arc<RwLock<Vec<BeehiivCredentials>>>,
}

impl Default for MockPostSource {
    fn default() -> Self {
        Self {
            outcome: MockOutcome::Posts(Vec::new()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockPostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with these posts
    pub fn with_posts(self, posts: Vec<PostRecord>) -> Self {
        Self {
            outcome: MockOutcome::Posts(posts),
            ..self
        }
    }

    /// Respond with a non-success upstream status
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            outcome: MockOutcome::ApiError {
                status,
                message: message.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PostSource for MockPostSource {
    async fn list_posts(
        &self,
        credentials: &BeehiivCredentials,
    ) -> Result<Vec<PostRecord>, BeehiivError> {
        self.calls.write().unwrap().push(credentials.clone());

        match &self.outcome {
            MockOutcome::Posts(posts) => Ok(posts.clone()),
            MockOutcome::ApiError { status, message } => Err(BeehiivError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
