//! Domain entities
//!
//! Models for the upstream newsletter posts and the feed they are rendered into.

pub mod feed_config;
pub mod post;

pub use feed_config::{BeehiivCredentials, FeedConfig};
pub use post::PostRecord;
