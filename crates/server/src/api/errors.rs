//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"error": "message"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use stock_core::{SearchError, StoreError};

/// Application-level error type that implements `IntoResponse`.
///
/// Each variant maps to an HTTP status code:
/// - `NotFound` → 404
/// - `BadRequest` → 400
/// - `Conflict` → 409
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found (404).
    NotFound(String),
    /// Invalid request parameters (400).
    BadRequest(String),
    /// Resource already exists or name already in use (409).
    Conflict(String),
    /// Unexpected server error or store failure (500).
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = axum::Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(_) | StoreError::DuplicateProductType(_) => {
                ApiError::Conflict(err.to_string())
            }
            StoreError::UnknownProductType(_) | StoreError::Invalid(_) => {
                ApiError::BadRequest(err.to_string())
            }
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::Unavailable(_) => {
                tracing::error!("Store failure: {}", err);
                ApiError::Internal("Store unavailable".into())
            }
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::UnsupportedCombineMode(_) => ApiError::BadRequest(err.to_string()),
            SearchError::StoreRead(source) => {
                tracing::error!("Search failed reading products: {}", source);
                ApiError::Internal("Failed to read products".into())
            }
        }
    }
}
