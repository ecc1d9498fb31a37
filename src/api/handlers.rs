//! API Handlers
//!
//! HTTP request handlers for each blog endpoint. Read endpoints for posts go
//! through the cache-aside layer with keys derived from the distinguishing
//! request attributes (page number, post id), so distinct requests never
//! share a cache entry.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::{cache_aside, MemoryCache};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::mail::MailQueue;
use crate::models::{
    CommentRequest, CommentView, ContactAccepted, ContactRequest, HealthResponse,
    JobStatusResponse, PageQuery, PostDetailResponse, PostListResponse, SearchRequest,
    SearchResponse, StatsResponse,
};
use crate::store::PostStore;

/// Application state shared across all handlers.
///
/// Holds the process-wide cache, document store, and mail queue handles as
/// injected dependencies rather than module-level singletons, so tests can
/// assemble states around fakes.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: MemoryCache,
    /// Post/comment document store
    pub posts: Arc<dyn PostStore>,
    /// Producer handle of the mail dispatcher
    pub mail: MailQueue,
    /// Posts per listing page
    pub page_size: usize,
    /// TTL in seconds for cached responses
    pub cache_ttl: u64,
}

impl AppState {
    /// Creates a new AppState from its collaborators and configuration.
    pub fn new(
        cache: MemoryCache,
        posts: Arc<dyn PostStore>,
        mail: MailQueue,
        config: &Config,
    ) -> Self {
        Self {
            cache,
            posts,
            mail,
            page_size: config.page_size,
            cache_ttl: config.cache_ttl,
        }
    }
}

/// Strips characters that are neither alphanumeric nor spaces from a search
/// term, mirroring the sanitization the search endpoint has always applied.
fn sanitize_search_term(term: &str) -> String {
    term.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

/// Handler for GET /posts
///
/// Serves one listing page, newest posts first, through the cache under
/// `posts:page:{page}`.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PostListResponse>> {
    let page = query.page();
    let per_page = state.page_size;
    let key = format!("posts:page:{}", page);

    let posts = state.posts.clone();
    let response = cache_aside(&state.cache, &key, state.cache_ttl, || async move {
        let page_data = posts.list_page(page, per_page).await?;
        Ok::<_, AppError>(PostListResponse::new(page_data, page, per_page))
    })
    .await?;

    Ok(Json(response))
}

/// Handler for GET /posts/:id
///
/// Serves a post with its comments through the cache under `post:{id}`.
/// Missing posts return 404 and are not cached.
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PostDetailResponse>> {
    let key = format!("post:{}", id);

    let posts = state.posts.clone();
    let response = cache_aside(&state.cache, &key, state.cache_ttl, || async move {
        let post = posts
            .find_post(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;
        let comments = posts.comments_for(id).await?;
        Ok::<_, AppError>(PostDetailResponse::new(post, comments))
    })
    .await?;

    Ok(Json(response))
}

/// Handler for GET /posts/:id/comments
///
/// Returns the comments for a post, uncached.
pub async fn comments_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<CommentView>>> {
    if state.posts.find_post(id).await?.is_none() {
        return Err(AppError::NotFound(format!("Post {} not found", id)));
    }

    let comments = state.posts.comments_for(id).await?;
    Ok(Json(comments.iter().map(CommentView::from).collect()))
}

/// Handler for POST /posts/:id/comments
///
/// Attaches a comment to a post. The cached detail page may stay stale for
/// up to the configured TTL afterwards.
pub async fn add_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentView>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::Validation(error_msg));
    }

    let comment = state.posts.add_comment(id, req.author, req.content).await?;
    Ok((StatusCode::CREATED, Json(CommentView::from(&comment))))
}

/// Handler for POST /search
///
/// Searches post titles and bodies with the sanitized term. Results are not
/// cached.
pub async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let term = sanitize_search_term(&req.term);
    if term.trim().is_empty() {
        return Err(AppError::Validation("Search term is required".to_string()));
    }

    let results = state.posts.search(&term).await?;
    Ok(Json(SearchResponse::new(term, &results)))
}

/// Handler for POST /contact
///
/// Queues a contact message for asynchronous delivery and acknowledges with
/// 202 and the job id. Validation failures and a saturated queue reject the
/// submission here; delivery failures later are visible via GET /jobs/:id.
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactAccepted>)> {
    let job_id = state.mail.enqueue(req.into_message()).await?;
    Ok((StatusCode::ACCEPTED, Json(ContactAccepted::new(job_id))))
}

/// Handler for GET /jobs/:id
///
/// Returns the state of a submitted contact message.
pub async fn job_status_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<JobStatusResponse>> {
    let record = state
        .mail
        .jobs()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))?;

    Ok(Json(JobStatusResponse::from(record)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
