// src/consumer/card.rs
//! Per-item presentation shaping: tag stripping, truncation, date formatting
//! and the placeholder substitutions the blog cards rely on.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::OnceCell;
use regex::Regex;

use crate::feed::types::FeedItem;

pub const DESCRIPTION_LIMIT: usize = 150;
pub const PLACEHOLDER_DESCRIPTION: &str = "No description available";
pub const PLACEHOLDER_IMAGE: &str = "/images/profilepicture/blog.jpg";
pub const PLACEHOLDER_DATE: &str = "No date";
const FALLBACK_TITLE: &str = "Untitled Article";

/// One renderable blog card. `key` is the stable identity used for list
/// reconciliation; it is the item link rather than the array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub date: String,
    pub link: String,
    pub categories: Vec<String>,
}

fn tag_regex() -> &'static Regex {
    static RE: OnceCell<Regex> = OnceCell::new();
    // A trailing `>` is optional so unterminated tags get stripped too.
    RE.get_or_init(|| Regex::new(r"<[^>]*>?").unwrap())
}

/// Tag-strip, entity-decode, then the naive 150-char cut with a trailing
/// ellipsis. Short descriptions still get the ellipsis; that matches the
/// site's historical rendering.
pub fn summarize_description(raw: &str) -> String {
    let stripped = tag_regex().replace_all(raw, "");
    let decoded = html_escape::decode_html_entities(stripped.as_ref());
    let cut: String = decoded.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{cut}...")
}

/// "Month Day, Year" in English, or the placeholder when the timestamp is
/// missing or unreadable. rss2json emits `2024-01-01 00:00:00`, Medium's raw
/// feed RFC 2822, and RFC 3339 shows up in mirrors, so all three are accepted.
pub fn format_pub_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return PLACEHOLDER_DATE.to_string();
    }
    parse_pub_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| PLACEHOLDER_DATE.to_string())
}

fn parse_pub_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Map one proxied item into its renderable card.
pub fn prepare_card(item: FeedItem) -> ArticleCard {
    let description = if item.description.trim().is_empty() {
        PLACEHOLDER_DESCRIPTION.to_string()
    } else {
        summarize_description(&item.description)
    };

    let image = item
        .thumbnail
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let title = if item.title.trim().is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        item.title
    };

    ArticleCard {
        key: item.link.clone(),
        title,
        description,
        image,
        date: format_pub_date(&item.pub_date),
        link: item.link,
        categories: item.categories,
    }
}
