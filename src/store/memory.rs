//! In-Memory Post Store
//!
//! PostStore implementation backed by shared in-memory vectors. Used by the
//! standalone binary and by tests; a database-backed implementation plugs in
//! behind the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Comment, Post, PostPage, PostStore, Result, StoreError};

#[derive(Debug, Default)]
struct Inner {
    posts: Vec<Post>,
    comments: Vec<Comment>,
    next_comment_id: u64,
}

// == Memory Post Store ==
/// Shared in-memory document store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPostStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryPostStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                posts,
                comments: Vec::new(),
                next_comment_id: 0,
            })),
        }
    }

    /// Inserts a post, replacing any existing post with the same id.
    pub async fn insert_post(&self, post: Post) {
        let mut inner = self.inner.write().await;
        inner.posts.retain(|p| p.id != post.id);
        inner.posts.push(post);
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_page(&self, page: usize, per_page: usize) -> Result<PostPage> {
        let inner = self.inner.read().await;

        // Newest first, id as tie-breaker for stable ordering
        let mut posts = inner.posts.clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = posts.len();
        let skip = page.saturating_sub(1).saturating_mul(per_page);
        let posts = posts.into_iter().skip(skip).take(per_page).collect();

        Ok(PostPage { posts, total })
    }

    async fn find_post(&self, id: u64) -> Result<Option<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn comments_for(&self, post_id: u64) -> Result<Vec<Comment>> {
        let inner = self.inner.read().await;
        Ok(inner
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn add_comment(&self, post_id: u64, author: String, content: String) -> Result<Comment> {
        let mut inner = self.inner.write().await;

        if !inner.posts.iter().any(|p| p.id == post_id) {
            return Err(StoreError::MissingPost(post_id));
        }

        inner.next_comment_id += 1;
        let comment = Comment {
            id: inner.next_comment_id,
            post_id,
            author,
            content,
            created_at: Utc::now(),
        };
        inner.comments.push(comment.clone());

        Ok(comment)
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>> {
        let inner = self.inner.read().await;
        let needle = term.to_lowercase();

        Ok(inner
            .posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.body.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_posts(count: u64) -> Vec<Post> {
        // Post 1 is the oldest, post `count` the newest
        (1..=count)
            .map(|id| {
                let mut post = Post::new(id, format!("Post {}", id), format!("Body of post {}", id));
                post.created_at = Utc::now() - Duration::minutes((count - id) as i64);
                post
            })
            .collect()
    }

    #[tokio::test]
    async fn test_list_page_newest_first() {
        let store = MemoryPostStore::with_posts(sample_posts(3));

        let page = store.list_page(1, 10).await.unwrap();
        assert_eq!(page.total, 3);

        let ids: Vec<u64> = page.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_list_page_skip_and_limit() {
        let store = MemoryPostStore::with_posts(sample_posts(5));

        let page = store.list_page(2, 2).await.unwrap();
        assert_eq!(page.total, 5);

        let ids: Vec<u64> = page.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_list_page_beyond_range() {
        let store = MemoryPostStore::with_posts(sample_posts(3));

        let page = store.list_page(5, 10).await.unwrap();
        assert_eq!(page.total, 3);
        assert!(page.posts.is_empty());
    }

    #[tokio::test]
    async fn test_find_post() {
        let store = MemoryPostStore::with_posts(sample_posts(3));

        assert!(store.find_post(2).await.unwrap().is_some());
        assert!(store.find_post(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_and_list_comments() {
        let store = MemoryPostStore::with_posts(sample_posts(1));

        let first = store
            .add_comment(1, "Ada".to_string(), "First!".to_string())
            .await
            .unwrap();
        let second = store
            .add_comment(1, "Grace".to_string(), "Second!".to_string())
            .await
            .unwrap();
        assert!(first.id < second.id);

        let comments = store.comments_for(1).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].author, "Ada");
        assert_eq!(comments[1].author, "Grace");
    }

    #[tokio::test]
    async fn test_add_comment_missing_post() {
        let store = MemoryPostStore::new();

        let result = store
            .add_comment(42, "Ada".to_string(), "Hello".to_string())
            .await;
        assert!(matches!(result, Err(StoreError::MissingPost(42))));
    }

    #[tokio::test]
    async fn test_search_case_insensitive() {
        let store = MemoryPostStore::with_posts(vec![
            Post::new(1, "Rust ownership", "Borrowing explained"),
            Post::new(2, "Cooking", "A post about BORROWED recipes"),
            Post::new(3, "Gardening", "Nothing relevant"),
        ]);

        let results = store.search("borrow").await.unwrap();
        let ids: Vec<u64> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_insert_post_replaces_same_id() {
        let store = MemoryPostStore::new();

        store.insert_post(Post::new(1, "Draft", "v1")).await;
        store.insert_post(Post::new(1, "Final", "v2")).await;

        let post = store.find_post(1).await.unwrap().unwrap();
        assert_eq!(post.title, "Final");

        let page = store.list_page(1, 10).await.unwrap();
        assert_eq!(page.total, 1);
    }
}
