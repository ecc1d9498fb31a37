//! Cache Backend Contract
//!
//! Abstracts the key-value store behind the cache-aside layer so that the
//! shared in-memory store can be swapped for a fake in tests.

use async_trait::async_trait;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors produced by a cache backend.
///
/// These are absorbed by the cache-aside layer (logged, then treated as a
/// miss) and never surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key or value violates a store limit
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Backend store unreachable or failed
    #[error("Cache backend error: {0}")]
    Backend(String),
}

/// Convenience Result type for cache backends.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Cache Backend Trait ==
/// Key-value store contract consumed by the cache-aside combinator.
///
/// `get` returns `None` for both missing and expired keys; the two cases
/// are indistinguishable to callers. `set` overwrites unconditionally, so
/// concurrent writers race with last-write-wins semantics.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Retrieves the stored value for a key, or None if absent/expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores a value under a key with an optional TTL in seconds.
    ///
    /// When `ttl_seconds` is None the backend's default TTL applies.
    async fn set(&self, key: &str, value: String, ttl_seconds: Option<u64>) -> Result<()>;
}
