//! API Routes
//!
//! Configures the Axum router with all blog backend endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_comment_handler, comments_handler, contact_handler, health_handler, job_status_handler,
    list_posts_handler, post_detail_handler, search_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /posts?page=N` - Paginated post listing (cached)
/// - `GET /posts/:id` - Post detail with comments (cached)
/// - `GET /posts/:id/comments` - Comments for a post
/// - `POST /posts/:id/comments` - Submit a comment
/// - `POST /search` - Search posts
/// - `POST /contact` - Queue a contact message
/// - `GET /jobs/:id` - Contact mail job status
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/posts/:id", get(post_detail_handler))
        .route(
            "/posts/:id/comments",
            get(comments_handler).post(add_comment_handler),
        )
        .route("/search", post(search_handler))
        .route("/contact", post(contact_handler))
        .route("/jobs/:id", get(job_status_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
