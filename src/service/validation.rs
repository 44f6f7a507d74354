//! Presence and type checks on request input, applied before any statement is sent.

use crate::error::AppError;
use crate::models::UserInput;
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Body must be a JSON object with non-blank string `name` and `email`. Other keys are ignored.
    pub fn user_input(body: Value) -> Result<UserInput, AppError> {
        let mut body = match body {
            Value::Object(m) => m,
            _ => return Err(AppError::BadRequest("body must be a JSON object".into())),
        };
        let name = required_string(&mut body, "name")?;
        let email = required_string(&mut body, "email")?;
        Ok(UserInput { name, email })
    }

    /// Path id must be a 64-bit integer.
    pub fn user_id(id_str: &str) -> Result<i64, AppError> {
        id_str
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
    }
}

fn required_string(body: &mut serde_json::Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.remove(field) {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(AppError::BadRequest(format!("{} is required", field)))
        }
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(AppError::BadRequest(format!("{} must be a string", field))),
    }
}
