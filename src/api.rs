// src/api.rs
//! HTTP surface of the feed proxy: `GET /api/blogs` plus health. The handler
//! is read-through cached and degrades to a JSON error payload on every
//! failure path.

use std::sync::Arc;

use anyhow::Context as _;
use axum::{extract::State, routing::get, Json, Router};
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use tower_http::cors::CorsLayer;

use crate::cache::FeedCache;
use crate::config::{FeedConfig, UpstreamPolicy};
use crate::error::ApiError;
use crate::feed::normalize_items;
use crate::feed::rss2json::Rss2JsonSource;
use crate::feed::types::{FeedItem, FeedSource, UpstreamFeed};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("feed_cache_hits_total", "Blog requests served from cache.");
        describe_counter!(
            "feed_cache_misses_total",
            "Blog requests that went upstream."
        );
        describe_counter!(
            "feed_upstream_errors_total",
            "Upstream fetch/parse/status failures."
        );
    });
}

#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn FeedSource>,
    cache: Arc<FeedCache>,
    policy: UpstreamPolicy,
}

impl AppState {
    pub fn new(source: Arc<dyn FeedSource>, cache: Arc<FeedCache>, policy: UpstreamPolicy) -> Self {
        Self {
            source,
            cache,
            policy,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self {
            source: Arc::new(Rss2JsonSource::new(&config.medium_username)),
            cache: Arc::new(FeedCache::new(config.cache_ttl)),
            policy: config.upstream_policy,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    ensure_metrics_described();

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/blogs", get(blogs))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// The proxy endpoint. No parameters; answers a normalized `FeedItem` array,
/// 502 on upstream trouble, 500 on anything else.
async fn blogs(State(state): State<AppState>) -> Result<Json<Vec<FeedItem>>, ApiError> {
    if let Some(items) = state.cache.get() {
        counter!("feed_cache_hits_total").increment(1);
        return Ok(Json(items));
    }
    counter!("feed_cache_misses_total").increment(1);

    let resp = state.source.fetch().await.map_err(|e| {
        counter!("feed_upstream_errors_total").increment(1);
        tracing::warn!(error = ?e, source = state.source.name(), "feed fetch failed");
        ApiError::Upstream(format!("Failed to fetch feed: {e:#}"))
    })?;

    if resp.status >= 400 {
        counter!("feed_upstream_errors_total").increment(1);
        tracing::warn!(
            status = resp.status,
            source = state.source.name(),
            "feed fetch returned non-success status"
        );
        return Err(ApiError::Upstream(format!(
            "Failed to fetch feed: {}",
            resp.status
        )));
    }

    let feed: UpstreamFeed =
        serde_json::from_str(&resp.body).context("parsing feed response")?;

    if feed.status != "ok" {
        counter!("feed_upstream_errors_total").increment(1);
        tracing::warn!(
            upstream_status = %feed.status,
            source = state.source.name(),
            "feed conversion reported failure"
        );
        return match state.policy {
            UpstreamPolicy::BadGateway => Err(ApiError::Upstream(
                feed.message
                    .unwrap_or_else(|| "Failed to parse RSS feed".to_string()),
            )),
            UpstreamPolicy::Empty => Ok(Json(Vec::new())),
        };
    }

    let items = normalize_items(feed.items);
    state.cache.put(items.clone());
    Ok(Json(items))
}
