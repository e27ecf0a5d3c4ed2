//! Portfolio Feed Service — Binary Entrypoint
//! Boots the Axum HTTP server that proxies the external blog feed for the
//! portfolio site's blog section.

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use portfolio_feed::{api, config::FeedConfig, metrics::Metrics};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - FEED_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("FEED_DEV_LOG").ok().is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_feed=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments. This is what makes
    // MEDIUM_USERNAME / FEED_UPSTREAM_POLICY overrides work locally.
    let _ = dotenvy::dotenv();

    enable_dev_tracing();

    let config = FeedConfig::load();
    let metrics = Metrics::init(config.cache_ttl.as_secs());

    let state = api::AppState::from_config(&config);
    let router = api::create_router(state).merge(metrics.router());

    Ok(router.into())
}
