//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Failure of a single remote statement. Never retried.
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("remote store unreachable: {0}")]
    Transport(String),
    #[error("remote store returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("remote store error: {0}")]
    Remote(String),
    #[error("malformed payload from remote store: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::Execution(_) => (StatusCode::INTERNAL_SERVER_ERROR, "execution_error"),
        }
    }
}

/// Error response body: `error` carries the message, `code` a stable machine-readable kind.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "name is required")]
    pub error: String,
    #[schema(example = "bad_request")]
    pub code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_string(),
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
