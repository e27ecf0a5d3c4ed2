// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod cache;
pub mod config;
pub mod consumer;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod scroll;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::config::FeedConfig;
pub use crate::consumer::{FeedClient, FeedView};
pub use crate::feed::types::FeedItem;
