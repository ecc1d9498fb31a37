//! Request and Response models for the blog API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. Response
//! types served through the cache derive Deserialize as well, because they
//! round-trip through the response cache as JSON.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CommentRequest, ContactRequest, PageQuery, SearchRequest};
pub use responses::{
    CommentView, ContactAccepted, ErrorResponse, HealthResponse, JobStatusResponse,
    PostDetailResponse, PostListResponse, PostSummary, SearchResponse, StatsResponse,
};
