// src/feed/mod.rs
//! Normalization of the upstream rss2json payload into `FeedItem` records.
//! Every output field gets a fallback so the client never sees a missing key.

pub mod rss2json;
pub mod types;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::feed::types::{FeedItem, UpstreamItem};

const FALLBACK_TITLE: &str = "Untitled";
const FALLBACK_LINK: &str = "#";

fn img_src_regex() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    // Medium wraps post images in the description HTML; src comes in either
    // quote style.
    RE.get_or_init(|| Regex::new(r#"(?i)<img[^>]+src=["']([^"'>]+)["']"#).unwrap())
}

/// Upstream thumbnail when present, else the first `<img src="...">` in the
/// raw HTML description, else nothing.
pub fn extract_thumbnail(item: &UpstreamItem) -> Option<String> {
    if let Some(t) = item.thumbnail.as_deref() {
        if !t.is_empty() {
            return Some(t.to_string());
        }
    }
    let desc = item.description.as_deref()?;
    img_src_regex()
        .captures(desc)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Apply the documented fallbacks so every field of the output is present.
pub fn normalize_item(item: UpstreamItem) -> FeedItem {
    let thumbnail = extract_thumbnail(&item);
    FeedItem {
        title: item.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        link: item.link.unwrap_or_else(|| FALLBACK_LINK.to_string()),
        pub_date: item.pub_date.unwrap_or_default(),
        thumbnail,
        description: item.description.unwrap_or_default(),
        categories: item.categories.unwrap_or_default(),
    }
}

/// Normalize a whole upstream item list, preserving order.
pub fn normalize_items(items: Vec<UpstreamItem>) -> Vec<FeedItem> {
    items.into_iter().map(normalize_item).collect()
}
