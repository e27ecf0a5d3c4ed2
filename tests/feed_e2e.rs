// tests/feed_e2e.rs
//
// End-to-end: spin the proxy router on a real socket, point the consumer at
// it, and check the rendered view — loading through populated/error/empty.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use portfolio_feed::api::{create_router, AppState};
use portfolio_feed::cache::FeedCache;
use portfolio_feed::config::UpstreamPolicy;
use portfolio_feed::consumer::{FeedClient, FeedView};
use portfolio_feed::feed::types::{FeedSource, UpstreamResponse};

const FALLBACK: &str = "https://medium.com/@nagarjunmallesh";

struct StubSource {
    status: u16,
    body: String,
}

#[async_trait]
impl FeedSource for StubSource {
    async fn fetch(&self) -> anyhow::Result<UpstreamResponse> {
        Ok(UpstreamResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Serve the proxy on an ephemeral port; returns its base URL.
async fn spawn_proxy(status: u16, body: String, policy: UpstreamPolicy) -> String {
    let state = AppState::new(
        Arc::new(StubSource { status, body }),
        Arc::new(FeedCache::new(Duration::from_secs(1800))),
        policy,
    );
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve proxy");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn one_post_flows_from_upstream_to_a_rendered_card() {
    let upstream = json!({
        "status": "ok",
        "items": [{
            "title": "Post A",
            "link": "https://x/a",
            "pubDate": "2024-01-01T00:00:00Z",
            "description": "<p><img src='https://img/a.png'/>Hello world</p>",
            "categories": ["tech"]
        }]
    })
    .to_string();

    let base = spawn_proxy(200, upstream, UpstreamPolicy::BadGateway).await;
    let client = FeedClient::new(base, FALLBACK);

    match client.load().await {
        FeedView::Populated(cards) => {
            assert_eq!(cards.len(), 1);
            let card = &cards[0];
            assert_eq!(card.title, "Post A");
            assert_eq!(card.date, "January 1, 2024");
            assert_eq!(card.description, "Hello world...");
            assert_eq!(card.image, "https://img/a.png");
            assert_eq!(card.link, "https://x/a");
            assert_eq!(card.categories, vec!["tech".to_string()]);
        }
        other => panic!("expected populated view, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_feed_renders_the_empty_state() {
    let upstream = json!({ "status": "ok", "items": [] }).to_string();
    let base = spawn_proxy(200, upstream, UpstreamPolicy::BadGateway).await;
    let client = FeedClient::new(base, FALLBACK);

    assert_eq!(client.load().await, FeedView::Empty);
}

#[tokio::test]
async fn nine_posts_render_exactly_six_cards() {
    let items: Vec<_> = (0..9)
        .map(|n| json!({ "title": format!("Post {n}"), "link": format!("https://x/{n}") }))
        .collect();
    let upstream = json!({ "status": "ok", "items": items }).to_string();

    let base = spawn_proxy(200, upstream, UpstreamPolicy::BadGateway).await;
    let client = FeedClient::new(base, FALLBACK);

    match client.load().await {
        FeedView::Populated(cards) => assert_eq!(cards.len(), 6),
        other => panic!("expected populated view, got {other:?}"),
    }
}

#[tokio::test]
async fn proxy_failure_renders_the_error_panel_with_fallback_link() {
    let base = spawn_proxy(503, "unavailable".into(), UpstreamPolicy::BadGateway).await;
    let client = FeedClient::new(base, FALLBACK);

    match client.load().await {
        FeedView::Error {
            message,
            fallback_url,
        } => {
            assert_eq!(message, "API returned 502");
            assert_eq!(fallback_url, FALLBACK);
        }
        other => panic!("expected error view, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_proxy_renders_the_error_panel() {
    // Nothing listens here; the port comes from a listener that was dropped.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = FeedClient::new(format!("http://{addr}"), FALLBACK);
    match client.load().await {
        FeedView::Error { fallback_url, .. } => assert_eq!(fallback_url, FALLBACK),
        other => panic!("expected error view, got {other:?}"),
    }
}
