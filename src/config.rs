//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds applied to cached responses
    pub cache_ttl: u64,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
    /// Number of posts per listing page
    pub page_size: usize,
    /// Recipient address for contact form messages
    pub contact_recipient: String,
    /// Capacity of the in-process mail queue
    pub mail_queue_depth: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_TTL` - Response cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 60)
    /// - `PAGE_SIZE` - Posts per listing page (default: 10)
    /// - `CONTACT_RECIPIENT` - Contact mail recipient (default: owner@example.com)
    /// - `MAIL_QUEUE_DEPTH` - Mail queue capacity (default: 64)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            contact_recipient: env::var("CONTACT_RECIPIENT")
                .unwrap_or_else(|_| "owner@example.com".to_string()),
            mail_queue_depth: env::var("MAIL_QUEUE_DEPTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            cache_ttl: 3600,
            cleanup_interval: 60,
            page_size: 10,
            contact_recipient: "owner@example.com".to_string(),
            mail_queue_depth: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.contact_recipient, "owner@example.com");
        assert_eq!(config.mail_queue_depth, 64);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("PAGE_SIZE");
        env::remove_var("CONTACT_RECIPIENT");
        env::remove_var("MAIL_QUEUE_DEPTH");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.mail_queue_depth, 64);
    }
}
