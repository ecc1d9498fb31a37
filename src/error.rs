//! Error types for the blog backend
//!
//! Provides unified error handling for the HTTP request path using thiserror.
//!
//! Cache failures never appear here: the cache layer fails open and absorbs
//! its own errors (see `cache::cache_aside`). Mail transport failures only
//! surface on the job record, never to the original HTTP caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::mail::EnqueueError;
use crate::store::StoreError;

// == App Error Enum ==
/// Unified error type for the HTTP request path.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Mail queue rejected the submission
    #[error("Mail queue unavailable: {0}")]
    QueueUnavailable(String),

    /// Document store failure
    #[error("Document store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Conversions ==
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingPost(id) => AppError::NotFound(format!("Post {} not found", id)),
            StoreError::Unavailable(msg) => AppError::Store(msg),
        }
    }
}

impl From<EnqueueError> for AppError {
    fn from(err: EnqueueError) -> Self {
        match err {
            EnqueueError::Validation(msg) => AppError::Validation(msg),
            EnqueueError::QueueFull | EnqueueError::QueueClosed => {
                AppError::QueueUnavailable(err.to_string())
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::QueueUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP request path.
pub type Result<T> = std::result::Result<T, AppError>;
