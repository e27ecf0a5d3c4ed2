// src/cache.rs
//! Single-slot, read-through cache for the normalized feed. Only successful
//! upstream rounds are stored; errors always fall through to a fresh fetch.

use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::feed::types::FeedItem;

pub struct FeedCache {
    ttl: Duration,
    slot: RwLock<Option<Entry>>,
}

struct Entry {
    stored_at: Instant,
    items: Vec<FeedItem>,
}

impl FeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Items stored within the TTL window, if any. Absolute TTL, no sliding
    /// refresh.
    pub fn get(&self) -> Option<Vec<FeedItem>> {
        let guard = self.slot.read().expect("rwlock poisoned");
        let entry = guard.as_ref()?;
        if entry.stored_at.elapsed() <= self.ttl {
            Some(entry.items.clone())
        } else {
            None
        }
    }

    pub fn put(&self, items: Vec<FeedItem>) {
        let mut guard = self.slot.write().expect("rwlock poisoned");
        *guard = Some(Entry {
            stored_at: Instant::now(),
            items,
        });
    }
}
