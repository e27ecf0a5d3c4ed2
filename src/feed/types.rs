// src/feed/types.rs
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One normalized blog post, as emitted by `GET /api/blogs`.
///
/// Every field is present in the JSON output; `thumbnail` serializes as
/// `null` when no image could be derived. Items carry no identity beyond
/// their position in the returned sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub thumbnail: Option<String>,
    pub description: String,
    pub categories: Vec<String>,
}

/// rss2json response envelope. `status` is `"ok"` on success; on failure the
/// service puts a human-readable reason in `message`.
#[derive(Debug, Deserialize)]
pub struct UpstreamFeed {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<UpstreamItem>,
}

/// One item as rss2json delivers it. Everything is optional; the feed has
/// been observed with each of these missing.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamItem {
    pub title: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
}

/// Raw upstream reply, before any shape validation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Seam between the proxy handler and the outbound HTTP call, so tests can
/// stub transport failures and malformed payloads.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<UpstreamResponse>;
    fn name(&self) -> &'static str;
}
