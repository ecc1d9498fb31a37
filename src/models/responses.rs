//! Response DTOs for the blog API
//!
//! Defines the structure of outgoing HTTP response bodies. Types that pass
//! through the response cache derive Deserialize for round-trip fidelity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;
use crate::mail::{JobId, JobRecord, JobState};
use crate::store::{Comment, Post, PostPage};

/// A post as it appears in listings and search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            created_at: post.created_at,
        }
    }
}

/// Response body for the post listing (GET /posts)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    /// 1-based page number served
    pub page: usize,
    /// Next page number, None on the last page
    pub next_page: Option<usize>,
    /// Total number of posts across all pages
    pub total: usize,
}

impl PostListResponse {
    /// Builds a listing page response, computing next-page availability.
    pub fn new(page_data: PostPage, page: usize, per_page: usize) -> Self {
        let next_page = if page.saturating_mul(per_page) < page_data.total {
            Some(page + 1)
        } else {
            None
        };
        Self {
            posts: page_data.posts.iter().map(PostSummary::from).collect(),
            page,
            next_page,
            total: page_data.total,
        }
    }
}

/// A comment as rendered under a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Response body for the post detail page (GET /posts/{id})
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<CommentView>,
}

impl PostDetailResponse {
    /// Builds a detail response from a post and its comments.
    pub fn new(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            created_at: post.created_at,
            comments: comments.iter().map(CommentView::from).collect(),
        }
    }
}

/// Response body for search (POST /search)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Sanitized term the search actually ran with
    pub term: String,
    pub results: Vec<PostSummary>,
}

impl SearchResponse {
    /// Builds a search response from matching posts.
    pub fn new(term: impl Into<String>, results: &[Post]) -> Self {
        Self {
            term: term.into(),
            results: results.iter().map(PostSummary::from).collect(),
        }
    }
}

/// Response body acknowledging a contact submission (POST /contact)
#[derive(Debug, Clone, Serialize)]
pub struct ContactAccepted {
    /// Success message
    pub message: String,
    /// Queue-assigned job id, usable with GET /jobs/{id}
    pub job_id: JobId,
}

impl ContactAccepted {
    /// Creates a new ContactAccepted acknowledgment.
    pub fn new(job_id: JobId) -> Self {
        Self {
            message: "Message queued for delivery".to_string(),
            job_id,
        }
    }
}

/// Response body for job status (GET /jobs/{id})
#[derive(Debug, Clone, Serialize)]
pub struct JobStatusResponse {
    pub id: JobId,
    pub state: JobState,
    /// Delivery failure text, present only for failed jobs
    pub error: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<JobRecord> for JobStatusResponse {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id,
            state: record.state,
            error: record.error,
            submitted_at: record.submitted_at,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries removed by TTL expiry
    pub expirations: u64,
    /// Number of cache write-backs
    pub stores: u64,
    /// Current number of cached responses
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            stores: stats.stores,
            total_entries: stats.total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page(total: usize, in_page: usize) -> PostPage {
        PostPage {
            posts: (1..=in_page as u64)
                .map(|id| Post::new(id, format!("Post {}", id), "body"))
                .collect(),
            total,
        }
    }

    #[test]
    fn test_post_list_next_page_present() {
        let resp = PostListResponse::new(sample_page(25, 10), 1, 10);
        assert_eq!(resp.page, 1);
        assert_eq!(resp.next_page, Some(2));
        assert_eq!(resp.total, 25);
        assert_eq!(resp.posts.len(), 10);
    }

    #[test]
    fn test_post_list_last_page() {
        let resp = PostListResponse::new(sample_page(25, 5), 3, 10);
        assert_eq!(resp.next_page, None);
    }

    #[test]
    fn test_post_list_exact_boundary() {
        // 20 posts at 10 per page: page 2 is the last
        let resp = PostListResponse::new(sample_page(20, 10), 2, 10);
        assert_eq!(resp.next_page, None);
    }

    #[test]
    fn test_post_list_round_trips_through_json() {
        let resp = PostListResponse::new(sample_page(3, 3), 1, 10);
        let json = serde_json::to_string(&resp).unwrap();
        let back: PostListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back.posts.len(), 3);
        assert_eq!(back.total, 3);
    }

    #[test]
    fn test_post_detail_includes_comments() {
        let post = Post::new(1, "Title", "Body");
        let comments = vec![Comment {
            id: 1,
            post_id: 1,
            author: "Ada".to_string(),
            content: "Nice".to_string(),
            created_at: Utc::now(),
        }];
        let resp = PostDetailResponse::new(post, comments);
        assert_eq!(resp.comments.len(), 1);
        assert_eq!(resp.comments[0].author, "Ada");
    }

    #[test]
    fn test_contact_accepted_serialize() {
        let resp = ContactAccepted::new(7);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"job_id\":7"));
        assert!(json.contains("queued"));
    }

    #[test]
    fn test_job_state_serializes_lowercase() {
        let resp = JobStatusResponse {
            id: 1,
            state: JobState::Failed,
            error: Some("smtp down".to_string()),
            submitted_at: Utc::now(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"state\":\"failed\""));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut stats = CacheStats::new();
        for _ in 0..8 {
            stats.record_hit();
        }
        for _ in 0..2 {
            stats.record_miss();
        }
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
