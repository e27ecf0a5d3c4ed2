// src/config.rs
//! Runtime configuration: env vars win over the optional `config/feed.toml`,
//! which wins over hardcoded defaults.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

pub const ENV_MEDIUM_USERNAME: &str = "MEDIUM_USERNAME";
pub const ENV_CACHE_TTL_SECS: &str = "FEED_CACHE_TTL_SECS";
pub const ENV_UPSTREAM_POLICY: &str = "FEED_UPSTREAM_POLICY";

pub const DEFAULT_MEDIUM_USERNAME: &str = "nagarjunmallesh";
/// Upstream responses are reused for 30 minutes.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 30;
pub const DEFAULT_CONFIG_PATH: &str = "config/feed.toml";

/// What to do when rss2json answers 2xx but its `status` field is not `"ok"`.
/// The site historically did both; the policy is an explicit choice here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpstreamPolicy {
    /// Surface it as a 502 carrying the upstream message.
    #[default]
    BadGateway,
    /// Treat the feed as empty and answer `200 []`.
    Empty,
}

impl UpstreamPolicy {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bad-gateway" | "bad_gateway" | "502" => Some(Self::BadGateway),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub medium_username: String,
    pub cache_ttl: Duration,
    pub upstream_policy: UpstreamPolicy,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            medium_username: DEFAULT_MEDIUM_USERNAME.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            upstream_policy: UpstreamPolicy::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    medium_username: Option<String>,
    cache_ttl_secs: Option<u64>,
    upstream_policy: Option<UpstreamPolicy>,
}

impl FeedConfig {
    pub fn load() -> Self {
        let file = read_file(Path::new(DEFAULT_CONFIG_PATH)).unwrap_or_default();
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    fn from_sources<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let medium_username = env(ENV_MEDIUM_USERNAME)
            .filter(|s| !s.trim().is_empty())
            .or(file.medium_username)
            .unwrap_or_else(|| DEFAULT_MEDIUM_USERNAME.to_string());

        let cache_ttl_secs = env(ENV_CACHE_TTL_SECS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .or(file.cache_ttl_secs)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let upstream_policy = env(ENV_UPSTREAM_POLICY)
            .and_then(|s| UpstreamPolicy::parse(&s))
            .or(file.upstream_policy)
            .unwrap_or_default();

        Self {
            medium_username,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            upstream_policy,
        }
    }
}

fn read_file(path: &Path) -> Option<FileConfig> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!(error = ?e, path = %path.display(), "ignoring malformed feed config");
            None
        }
    }
}
