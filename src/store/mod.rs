//! Document Store Module
//!
//! Contract for the post/comment document store. The real deployment target
//! is an external document database reached over its own client; this module
//! only fixes the query surface the handlers rely on, with an in-memory
//! implementation for standalone operation and tests.

mod memory;

pub use memory::MemoryPostStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

// == Domain Types ==
/// A blog post as held by the document store.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Creates a post timestamped now.
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }
}

/// A reader comment attached to a post.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the post listing plus the total post count.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: usize,
}

// == Store Error Enum ==
/// Errors produced by the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Referenced post does not exist
    #[error("Post {0} does not exist")]
    MissingPost(u64),

    /// Store unreachable or failed
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// == Post Store Trait ==
/// Query surface over the post/comment documents.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Returns one listing page, newest posts first. Pages are 1-based.
    async fn list_page(&self, page: usize, per_page: usize) -> Result<PostPage>;

    /// Looks up a single post by id.
    async fn find_post(&self, id: u64) -> Result<Option<Post>>;

    /// Returns the comments for a post, oldest first.
    async fn comments_for(&self, post_id: u64) -> Result<Vec<Comment>>;

    /// Attaches a comment to an existing post.
    async fn add_comment(&self, post_id: u64, author: String, content: String) -> Result<Comment>;

    /// Case-insensitive substring search over post titles and bodies.
    async fn search(&self, term: &str) -> Result<Vec<Post>>;
}
