use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use tracing::error;

use crate::domain::DomainError;

pub const METADATA_FAILURE: &str = "Failed to create metadata";
pub const INTERNAL_FAILURE: &str = "Internal Server Error";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Metadata(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Metadata(msg) => write!(f, "Metadata error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side details are logged, callers only see a generic message
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Metadata(detail) => {
                error!("Error creating metadata: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, METADATA_FAILURE.to_string())
            }
            ApiError::Internal(detail) => {
                error!("Error handling request: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_FAILURE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::BadRequest(msg),
            DomainError::Metadata(e) => ApiError::Metadata(e.to_string()),
            DomainError::Encoding(msg) => ApiError::Internal(format!("Encoding error: {}", msg)),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
