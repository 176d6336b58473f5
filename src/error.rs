//! Error handling module
//!
//! Provides the unified error type for the API and its JSON rendering.
//! Not-found errors carry a single `error` field, client input problems a
//! list of `errors`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const PRICE_OUT_OF_RANGE: &str = "Price must be between 1 and 30";
pub const INTEGRITY_ERROR: &str = "Integrity error";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// The store rejected a write on a foreign-key or uniqueness constraint
    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Body for lookups that found nothing
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for rejected client input
#[derive(Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: msg })).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsResponse { errors })).into_response()
            }
            AppError::Integrity(detail) => {
                warn!("Integrity violation: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorsResponse {
                        errors: vec![INTEGRITY_ERROR.to_string()],
                    }),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                server_error(StatusCode::INTERNAL_SERVER_ERROR, "A database error occurred")
            }
            AppError::Pool(e) => {
                error!("Pool error: {:?}", e);
                server_error(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database connection pool exhausted",
                )
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                server_error(StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred")
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                server_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A configuration error occurred",
                )
            }
        }
    }
}

fn server_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Helper function to create a validation error with a single message
pub fn validation_error(msg: impl Into<String>) -> AppError {
    AppError::Validation(vec![msg.into()])
}

/// Helper function to create a not found error
pub fn not_found_error(msg: impl Into<String>) -> AppError {
    AppError::NotFound(msg.into())
}
