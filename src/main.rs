//! Pressroom - A blog backend with response caching and deferred mail
//!
//! Serves paginated post listings, post detail with comments, and search
//! through a TTL-based cache-aside layer, and accepts contact form
//! submissions that are dispatched asynchronously by a mail worker.

mod api;
mod cache;
mod config;
mod error;
mod mail;
mod models;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::MemoryCache;
use config::Config;
use mail::{spawn_mail_worker, LogTransport, MailQueue};
use store::{MemoryPostStore, Post};
use tasks::spawn_cleanup_task;

/// Main entry point for the blog backend.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache and document store
/// 4. Create the mail queue and start the mail worker
/// 5. Start the background cache sweep task
/// 6. Create the Axum router with all endpoints
/// 7. Start the HTTP server on the configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pressroom=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pressroom blog backend");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cleanup_interval={}s, page_size={}, mail_queue_depth={}",
        config.server_port,
        config.cache_ttl,
        config.cleanup_interval,
        config.page_size,
        config.mail_queue_depth
    );

    // Shared response cache
    let cache = MemoryCache::new(config.cache_ttl);
    info!("Response cache initialized");

    // In-memory document store with starter content
    let posts = Arc::new(MemoryPostStore::with_posts(starter_posts()));

    // Mail dispatcher: bounded queue plus worker task
    let (mail, mail_rx) = MailQueue::new(config.mail_queue_depth);
    let worker_handle = spawn_mail_worker(
        mail_rx,
        Arc::new(LogTransport),
        mail.jobs().clone(),
        config.contact_recipient.clone(),
    );
    info!("Mail worker started");

    // Start background cache sweep task
    let cleanup_handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
    info!("Background cache sweep task started");

    // Create router with all endpoints
    let state = AppState::new(cache, posts, mail, &config);
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    // The router (and with it the queue sender) is gone; the worker drains
    // what is left and exits
    if let Err(err) = worker_handle.await {
        warn!("Mail worker task failed: {}", err);
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Starter posts so a fresh instance has something to serve.
fn starter_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "Welcome to Pressroom",
            "This instance is up and serving. Listing pages and post detail \
             are cached for the configured TTL; use the contact form to reach \
             the site owner.",
        ),
        Post::new(
            2,
            "Writing your first post",
            "Posts live in the document store behind the PostStore trait. \
             Point the backend at your own store implementation to publish \
             real content.",
        ),
    ]
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep task
    cleanup_handle.abort();
    warn!("Cache sweep task aborted");
}
