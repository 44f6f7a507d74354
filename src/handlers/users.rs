//! Users CRUD handlers: create, list, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::models::{User, UserInput};
use crate::response::{created, ok, MessageResult};
use crate::service::{RequestValidator, UserService};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// A body cut off by the size limit stays 413, the same status the limit layer gives when
/// `Content-Length` is known up front.
fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v).map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })
}

fn path_id(path: Result<Path<String>, PathRejection>) -> Result<i64, AppError> {
    let Path(id_str) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    RequestValidator::user_id(&id_str)
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created successfully", body = MessageResult),
        (status = 400, description = "Missing or invalid name/email", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Remote store failure", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestValidator::user_input(json_body(body)?)?;
    let result = UserService::create(state.executor.as_ref(), &input).await?;
    Ok(created("User created successfully", result))
}

/// Get all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 500, description = "Remote store failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = UserService::list(state.executor.as_ref()).await?;
    Ok(Json(rows))
}

/// Update a user's name and email.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated successfully", body = MessageResult),
        (status = 400, description = "Invalid id, name or email", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Remote store failure", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let input = RequestValidator::user_input(json_body(body)?)?;
    let result = UserService::update(state.executor.as_ref(), id, &input).await?;
    Ok(ok("User updated successfully", result))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResult),
        (status = 400, description = "Invalid id", body = ErrorBody),
        (status = 500, description = "Remote store failure", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(path)?;
    let result = UserService::delete(state.executor.as_ref(), id).await?;
    Ok(ok("User deleted successfully", result))
}
