// src/feed/rss2json.rs
//! Outbound client for the rss2json.com conversion service, which shields us
//! from Medium's CORS and access restrictions (free tier: 10,000 requests/day).

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::feed::types::{FeedSource, UpstreamResponse};

pub const RSS2JSON_API: &str = "https://api.rss2json.com/v1/api.json";

/// Syndication feed address for a Medium account.
pub fn medium_feed_url(username: &str) -> String {
    format!("https://medium.com/feed/@{username}")
}

/// Canonical human-facing profile page, used as the manual fallback link.
pub fn medium_profile_url(username: &str) -> String {
    format!("https://medium.com/@{username}")
}

pub struct Rss2JsonSource {
    url: String,
    client: reqwest::Client,
}

impl Rss2JsonSource {
    pub fn new(medium_username: &str) -> Self {
        let feed_url = medium_feed_url(medium_username);
        Self {
            url: format!("{RSS2JSON_API}?rss_url={}", urlencoding::encode(&feed_url)),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for Rss2JsonSource {
    async fn fetch(&self) -> Result<UpstreamResponse> {
        let resp = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("rss2json http get()")?;
        let status = resp.status().as_u16();
        let body = resp.text().await.context("rss2json http .text()")?;
        Ok(UpstreamResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "rss2json"
    }
}
