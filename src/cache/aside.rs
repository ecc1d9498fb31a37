//! Cache-Aside Combinator
//!
//! Wraps an arbitrary read operation with the cache-aside pattern: serve a
//! stored response when present and unexpired, otherwise invoke the inner
//! operation and write its result back.
//!
//! The combinator is deliberately ignorant of what it caches: payloads
//! round-trip through JSON and the inner operation is an injected closure.
//! There is no single-flight guarantee; concurrent misses for the same key
//! may each invoke the inner operation and each write back.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::backend::CacheBackend;

/// Runs `load` through the cache under `key` with the given TTL.
///
/// On a hit the stored payload is returned and `load` is never invoked. On a
/// miss, `load` produces the value, which is written back and returned.
///
/// Failure policy (fail open): backend get/set errors and stored payloads
/// that no longer deserialize are logged and treated as misses, so a cache
/// outage degrades latency but never correctness. Errors from `load` itself
/// propagate unchanged and nothing is cached for them.
pub async fn cache_aside<B, T, E, F, Fut>(
    backend: &B,
    key: &str,
    ttl_seconds: u64,
    load: F,
) -> Result<T, E>
where
    B: CacheBackend + ?Sized,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match backend.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                return Ok(value);
            }
            Err(err) => {
                // Malformed stored payload is a miss, not a fatal error
                warn!(key, error = %err, "discarding undecodable cache entry");
            }
        },
        Ok(None) => {
            debug!(key, "cache miss");
        }
        Err(err) => {
            warn!(key, error = %err, "cache read failed, falling through");
        }
    }

    let value = load().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(err) = backend.set(key, raw, Some(ttl_seconds)).await {
                warn!(key, error = %err, "cache write failed, response unaffected");
            }
        }
        Err(err) => {
            warn!(key, error = %err, "response not serializable for caching");
        }
    }

    Ok(value)
}
