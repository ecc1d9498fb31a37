//! API Module
//!
//! HTTP handlers and routing for the blog backend REST API.
//!
//! # Endpoints
//! - `GET /posts?page=N` - Paginated post listing (cached)
//! - `GET /posts/:id` - Post detail with comments (cached)
//! - `GET /posts/:id/comments` - Comments for a post
//! - `POST /posts/:id/comments` - Submit a comment
//! - `POST /search` - Search posts
//! - `POST /contact` - Queue a contact message
//! - `GET /jobs/:id` - Contact mail job status
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
