//! Pressroom - A blog backend with response caching and deferred mail
//!
//! Serves paginated post listings, post detail with comments, and search
//! through a TTL-based cache-aside layer, and accepts contact form
//! submissions that are dispatched asynchronously by a mail worker.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod mail;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
