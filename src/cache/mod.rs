//! Cache Module
//!
//! Provides the TTL response cache and the cache-aside combinator used to
//! wrap read endpoints. Expired entries are indistinguishable from absent
//! ones, and cache failures never reach the request path.

mod aside;
mod backend;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use aside::cache_aside;
pub use backend::{CacheBackend, CacheError};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{MemoryCache, ResponseCache};

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB
