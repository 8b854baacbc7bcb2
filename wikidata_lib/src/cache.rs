//! In-memory TTL cache of serialized API responses, backed by `DashMap`.

use dashmap::DashMap;
use std::time::{Duration, Instant};

struct CacheEntry {
    json: String,
    expires_at: Instant,
}

/// Thread-safe response cache with time-to-live expiration.
///
/// Values are the JSON text of a response. Expired entries are evicted
/// lazily when their key is read, or in bulk by [`MemoryCache::purge_expired`].
pub struct MemoryCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached JSON for `key`, or `None` if absent or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        {
            let entry = self.entries.get(key)?;
            if Instant::now() <= entry.expires_at {
                return Some(entry.json.clone());
            }
        }
        // The read guard must be released before removing.
        self.entries.remove(key);
        None
    }

    /// Stores `json` under `key`, replacing any previous entry.
    pub fn set(&self, key: String, json: String) {
        let expires_at = Instant::now() + self.ttl;
        self.entries.insert(key, CacheEntry { json, expires_at });
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Drops every expired entry.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.expires_at >= now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
