//! Request DTOs for the blog API
//!
//! Defines the structure of incoming HTTP request bodies and queries.

use serde::Deserialize;

use crate::mail::ContactMessage;

/// Query parameters for the post listing (GET /posts)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// 1-based page number; anything below 1 is clamped to 1
    #[serde(default)]
    pub page: Option<usize>,
}

impl PageQuery {
    /// Returns the effective page number.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Request body for the search operation (POST /search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Raw search term; sanitized before querying the store
    pub term: String,
}

/// Request body for the contact form (POST /contact)
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Converts the request into the dispatcher's message type.
    ///
    /// Field validation happens at enqueue time, in one place.
    pub fn into_message(self) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}

/// Request body for comment submission (POST /posts/{id}/comments)
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRequest {
    pub author: String,
    pub content: String,
}

impl CommentRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.author.trim().is_empty() {
            return Some("Author is required".to_string());
        }
        if self.content.trim().is_empty() {
            return Some("Content is required".to_string());
        }
        None
    }
}
