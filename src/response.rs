//! Response envelope for mutations: a human-readable message plus the statement outcome.

use crate::executor::StatementOutcome;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageResult {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub result: StatementOutcome,
}

pub fn created(message: &str, result: StatementOutcome) -> (StatusCode, Json<MessageResult>) {
    (
        StatusCode::CREATED,
        Json(MessageResult {
            message: message.to_string(),
            result,
        }),
    )
}

pub fn ok(message: &str, result: StatementOutcome) -> (StatusCode, Json<MessageResult>) {
    (
        StatusCode::OK,
        Json(MessageResult {
            message: message.to_string(),
            result,
        }),
    )
}
