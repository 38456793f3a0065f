//! Feed renderer
//!
//! Renders newsletter posts to an RSS 2.0 document.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::domain::entities::{FeedConfig, PostRecord};
use crate::error::RenderError;

/// Maximum number of items in one feed
pub const MAX_ITEMS: usize = 20;

pub const GENERATOR: &str = "beehiiv-rss-api";
const LANGUAGE: &str = "en-us";
const TTL_MINUTES: &str = "60";
const UNTITLED: &str = "Untitled Post";

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

/// One `<item>`, derived from a published post
#[derive(Debug, Clone, PartialEq)]
pub struct RssItem {
    pub title: String,
    pub link: String,
    pub guid: String,
    pub pub_date: String,
    pub author: String,
    pub description: String,
}

impl RssItem {
    /// Map a post to an item; `now` stands in for a missing publish date
    pub fn from_post(
        post: &PostRecord,
        config: &FeedConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, RenderError> {
        let pub_date = match post.publish_date {
            Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
                .ok_or(RenderError::InvalidTimestamp(secs))?,
            None => now,
        };

        let link = match post.web_url() {
            Some(url) => url.to_string(),
            None => format!("{}/post/{}", config.feed_url, post.id_string()),
        };

        Ok(Self {
            title: post.title().unwrap_or(UNTITLED).to_string(),
            guid: link.clone(),
            link,
            pub_date: http_date(pub_date),
            author: config.author_email.clone(),
            description: strip_dangerous_blocks(post.html_body()),
        })
    }
}

/// Render posts as RSS, using the current time for build and fallback dates
pub fn render_rss(posts: &[PostRecord], config: &FeedConfig) -> Result<String, RenderError> {
    render_rss_at(posts, config, Utc::now())
}

/// Render posts as RSS with an explicit clock
pub fn render_rss_at(
    posts: &[PostRecord],
    config: &FeedConfig,
    now: DateTime<Utc>,
) -> Result<String, RenderError> {
    let items = posts
        .iter()
        .filter(|p| p.is_published())
        .take(MAX_ITEMS)
        .map(|p| RssItem::from_post(p, config, now))
        .collect::<Result<Vec<_>, _>>()?;

    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<rss version=\"2.0\">\n");
    buf.push_str("  <channel>\n");
    push_element(&mut buf, 4, "title", &config.title);
    push_element(&mut buf, 4, "link", &config.feed_url);
    push_element(&mut buf, 4, "description", &config.description);
    push_element(&mut buf, 4, "language", LANGUAGE);
    push_element(&mut buf, 4, "lastBuildDate", &http_date(now));
    push_element(&mut buf, 4, "managingEditor", &config.author_email);
    push_element(&mut buf, 4, "webMaster", &config.author_email);
    push_element(&mut buf, 4, "generator", GENERATOR);
    push_element(&mut buf, 4, "ttl", TTL_MINUTES);

    for item in &items {
        buf.push_str(&render_item(item));
    }

    buf.push_str("  </channel>\n");
    buf.push_str("</rss>\n");

    Ok(buf)
}

fn render_item(item: &RssItem) -> String {
    let mut buf = String::from("    <item>\n");
    push_element(&mut buf, 6, "title", &item.title);
    push_element(&mut buf, 6, "link", &item.link);
    push_element(&mut buf, 6, "guid", &item.guid);
    push_element(&mut buf, 6, "pubDate", &item.pub_date);
    push_element(&mut buf, 6, "author", &item.author);
    // CDATA is not split, so a literal "]]>" in the post HTML ends the section early.
    buf.push_str(&format!(
        "      <description><![CDATA[{}]]></description>\n",
        item.description
    ));
    buf.push_str("    </item>\n");
    buf
}

fn push_element(buf: &mut String, indent: usize, name: &str, value: &str) {
    buf.push_str(&format!(
        "{:indent$}<{name}>{}</{name}>\n",
        "",
        escape_xml(value),
        indent = indent,
        name = name
    ));
}

/// RFC 1123 date, e.g. `Mon, 01 Jan 2024 00:00:00 GMT`
fn http_date(dt: DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Escape the five XML special characters, ampersand first
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Remove `<script>` and `<style>` blocks. Everything else passes through.
pub fn strip_dangerous_blocks(html: &str) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(html, "");
    STYLE_BLOCK.replace_all(&without_scripts, "").into_owned()
}
