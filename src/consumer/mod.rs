// src/consumer/mod.rs
//! Client side of the pipeline: fetch the proxy once, fold the outcome into
//! a terminal view state, render at most six cards.

pub mod card;

use anyhow::{Context, Result};

pub use card::{prepare_card, ArticleCard};

use crate::feed::types::FeedItem;

/// At most this many cards are rendered.
pub const MAX_CARDS: usize = 6;

/// Render states of the blog section. `Loading` holds between a `load()`
/// call and its completion; the other three are terminal until a fresh
/// `load()` — there is no retry and no polling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedView {
    #[default]
    Loading,
    /// Fetch failed; `fallback_url` points at the blog's canonical
    /// human-facing page.
    Error {
        message: String,
        fallback_url: String,
    },
    Empty,
    Populated(Vec<ArticleCard>),
}

/// Build the view for an already-fetched item list.
pub fn view_from_items(items: Vec<FeedItem>) -> FeedView {
    if items.is_empty() {
        return FeedView::Empty;
    }
    FeedView::Populated(
        items
            .into_iter()
            .take(MAX_CARDS)
            .map(prepare_card)
            .collect(),
    )
}

/// Client for the proxy endpoint. One request per `load()` call; dropping
/// the returned future cancels the in-flight request, so no unmount guard
/// is needed.
pub struct FeedClient {
    base_url: String,
    fallback_url: String,
    client: reqwest::Client,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>, fallback_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fallback_url: fallback_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch `/api/blogs` and fold the outcome into a terminal view state.
    pub async fn load(&self) -> FeedView {
        match self.fetch_items().await {
            Ok(items) => view_from_items(items),
            Err(e) => {
                tracing::warn!(error = ?e, "blog fetch failed");
                FeedView::Error {
                    message: format!("{e:#}"),
                    fallback_url: self.fallback_url.clone(),
                }
            }
        }
    }

    async fn fetch_items(&self) -> Result<Vec<FeedItem>> {
        let url = format!("{}/api/blogs", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("requesting /api/blogs")?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("API returned {}", status.as_u16());
        }

        resp.json::<Vec<FeedItem>>()
            .await
            .context("decoding /api/blogs body")
    }
}
