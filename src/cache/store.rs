//! Cache Store Module
//!
//! In-memory response cache with TTL expiry. Entries are removed only when
//! their TTL elapses (checked on read, plus a periodic sweep); there is no
//! capacity eviction. Writes overwrite unconditionally, so concurrent
//! writers for the same key resolve last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::backend::{CacheBackend, Result};
use crate::cache::{CacheEntry, CacheError, CacheStats, MAX_KEY_LENGTH, MAX_VALUE_SIZE};

// == Response Cache ==
/// Key-value storage for serialized response payloads.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in seconds applied when a write specifies none
    default_ttl: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a serialized payload with optional TTL.
    ///
    /// If the key already exists the value is overwritten and the TTL is
    /// reset (last-write-wins).
    pub fn set(&mut self, key: String, value: String, ttl: Option<u64>) -> Result<()> {
        // Validate key length
        if key.is_empty() || key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key must be 1..={} bytes",
                MAX_KEY_LENGTH
            )));
        }

        // Validate value size
        if value.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key, entry);

        self.stats.record_store();
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Returns None for missing and expired keys alike; an expired entry is
    /// removed on access and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Memory Cache ==
/// Shared handle to a ResponseCache.
///
/// This is the process-wide cache instance injected into the cache-aside
/// layer and the background sweep task. Cloning is cheap and all clones
/// observe the same store.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    inner: Arc<RwLock<ResponseCache>>,
}

impl MemoryCache {
    /// Creates a new shared cache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ResponseCache::new(default_ttl))),
        }
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    /// Removes all expired entries, returning the number removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.write().await.cleanup_expired()
    }

    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Write lock: reads update stats and prune expired entries
        let mut cache = self.inner.write().await;
        Ok(cache.get(key))
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> Result<()> {
        let mut cache = self.inner.write().await;
        cache.set(key.to_string(), value, ttl_seconds)
    }
}
