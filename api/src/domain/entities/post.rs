//! Newsletter post entity
//!
//! Posts come straight from the Beehiiv API and are treated as untrusted:
//! every field may be missing or `null`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Status value Beehiiv uses for published posts
pub const PUBLISHED_STATUS: &str = "confirmed";

/// Post identifier; Beehiiv sends strings but numbers are tolerated
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Text(String),
    Number(serde_json::Number),
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostId::Text(s) => f.write_str(s),
            PostId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Read a field as `None` when it is missing, `null`, or of an unexpected type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// One post as returned by `GET /publications/{id}/posts`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<PostId>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    /// Unix timestamp in seconds
    #[serde(deserialize_with = "lenient")]
    pub publish_date: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub web_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content: Option<PostContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostContent {
    #[serde(deserialize_with = "lenient")]
    pub free: Option<PostContentVariant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostContentVariant {
    #[serde(deserialize_with = "lenient")]
    pub web: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PostRecord {
    pub fn is_published(&self) -> bool {
        self.status.as_deref() == Some(PUBLISHED_STATUS)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn web_url(&self) -> Option<&str> {
        non_empty(&self.web_url)
    }

    /// Identifier as text; empty when the post has none
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Free web HTML, then subtitle, then empty
    pub fn html_body(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|c| c.free.as_ref())
            .and_then(|f| non_empty(&f.web))
            .or_else(|| non_empty(&self.subtitle))
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_post() {
        let json = r#"{
            "id": "post_00000000-0000-0000-0000-000000000000",
            "title": "Weekly Update",
            "subtitle": "What happened",
            "status": "confirmed",
            "publish_date": 1704067200,
            "web_url": "https://news.example.com/p/weekly-update",
            "content": { "free": { "web": "<p>Hello</p>" } }
        }"#;

        let post: PostRecord = serde_json::from_str(json).unwrap();

        assert!(post.is_published());
        assert_eq!(
            post.id_string(),
            "post_00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(post.publish_date, Some(1704067200));
        assert_eq!(post.title(), Some("Weekly Update"));
        assert_eq!(post.html_body(), "<p>Hello</p>");
    }

    #[test]
    fn parse_minimal_post() {
        let post: PostRecord = serde_json::from_str("{}").unwrap();

        assert!(!post.is_published());
        assert_eq!(post.id_string(), "");
        assert!(post.title().is_none());
        assert!(post.web_url().is_none());
        assert_eq!(post.html_body(), "");
    }

    #[test]
    fn parse_null_fields() {
        let json = r#"{
            "id": null,
            "status": null,
            "publish_date": null,
            "web_url": null,
            "title": null,
            "subtitle": null,
            "content": { "free": null }
        }"#;

        let post: PostRecord = serde_json::from_str(json).unwrap();

        assert!(post.publish_date.is_none());
        assert_eq!(post.html_body(), "");
    }

    #[test]
    fn mistyped_fields_read_as_none() {
        let json = r#"{
            "id": ["not", "an", "id"],
            "status": "confirmed",
            "publish_date": "2024-01-01",
            "web_url": 7,
            "title": { "text": "nested" },
            "subtitle": "Still here",
            "content": { "free": { "web": false } }
        }"#;

        let post: PostRecord = serde_json::from_str(json).unwrap();

        assert!(post.is_published());
        assert!(post.id.is_none());
        assert!(post.publish_date.is_none());
        assert!(post.web_url().is_none());
        assert!(post.title().is_none());
        assert_eq!(post.html_body(), "Still here");
    }

    #[test]
    fn mistyped_content_reads_as_none() {
        let post: PostRecord =
            serde_json::from_str(r#"{"content": "<p>flat</p>", "subtitle": "sub"}"#).unwrap();

        assert!(post.content.is_none());
        assert_eq!(post.html_body(), "sub");
    }

    #[test]
    fn numeric_id_is_displayed() {
        let post: PostRecord = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(post.id_string(), "42");
    }

    #[test]
    fn html_body_falls_back_to_subtitle() {
        let post = PostRecord {
            subtitle: Some("Just a subtitle".to_string()),
            content: Some(PostContent {
                free: Some(PostContentVariant {
                    web: Some(String::new()),
                }),
            }),
            ..Default::default()
        };

        assert_eq!(post.html_body(), "Just a subtitle");
    }

    #[test]
    fn only_confirmed_is_published() {
        for status in ["draft", "archived", "Confirmed", ""] {
            let post = PostRecord {
                status: Some(status.to_string()),
                ..Default::default()
            };
            assert!(!post.is_published(), "status {:?}", status);
        }
    }
}
