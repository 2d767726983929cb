//! Error responses for the HTTP layer.
//!
//! # Design
//! `Validation` and `NotFound` get dedicated variants because the routes
//! surface them with distinct status codes and stable client-facing
//! messages. Everything else lands in `Unexpected`, which logs the detail
//! and answers with a generic body so internals never reach a client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::StoreError;

/// JSON body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The referenced todo does not exist.
    #[error("Todo not found")]
    NotFound,

    /// Any other failure while handling a request. The payload is logged,
    /// never serialized.
    #[error("Internal Server Error")]
    Unexpected(String),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        ApiError::Validation("Invalid todo id".to_string())
    }

    pub fn invalid_cursor() -> Self {
        ApiError::Validation("Invalid cursor".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::NotFound(id) => {
                tracing::debug!(%id, "todo lookup missed");
                ApiError::NotFound
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unexpected(detail) => {
                tracing::error!(%detail, "request failed unexpectedly");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
