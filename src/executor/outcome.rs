//! Normalizes remote query payloads into rows plus mutation metadata.

use crate::error::ExecutionError;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One result row: column name to value.
pub type Row = Map<String, Value>;

const ROWS_AFFECTED_KEYS: &[&str] = &["rows_affected", "affected_row_count", "rowsAffected"];
const LAST_INSERT_KEYS: &[&str] = &["last_insert_rowid", "lastInsertRowid"];

/// Result of one statement, in the order the remote store returned the rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct StatementOutcome {
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_insert_rowid: Option<i64>,
}

impl StatementOutcome {
    /// Accepts a bare array of row objects, or an object carrying `rows` (objects, or arrays
    /// zipped with `columns`) and/or mutation metadata. An object with a string `error` is a
    /// remote failure.
    pub fn from_payload(payload: Value) -> Result<Self, ExecutionError> {
        match payload {
            Value::Array(items) => Ok(StatementOutcome {
                rows: object_rows(items)?,
                ..Default::default()
            }),
            Value::Object(mut obj) => {
                if let Some(Value::String(message)) = obj.get("error") {
                    return Err(ExecutionError::Remote(message.clone()));
                }
                let rows_affected = first_key(&obj, ROWS_AFFECTED_KEYS).and_then(as_u64);
                let last_insert_rowid = first_key(&obj, LAST_INSERT_KEYS).and_then(as_i64);
                let rows = match obj.remove("rows") {
                    Some(Value::Array(items)) => match obj.remove("columns") {
                        Some(Value::Array(columns)) => zipped_rows(&column_names(columns)?, items)?,
                        Some(other) => {
                            return Err(ExecutionError::Malformed(format!(
                                "columns must be an array, got {}",
                                kind(&other)
                            )))
                        }
                        None => object_rows(items)?,
                    },
                    Some(Value::Null) | None => {
                        if rows_affected.is_none() && last_insert_rowid.is_none() {
                            return Err(ExecutionError::Malformed(
                                "object has neither rows nor mutation metadata".into(),
                            ));
                        }
                        Vec::new()
                    }
                    Some(other) => {
                        return Err(ExecutionError::Malformed(format!(
                            "rows must be an array, got {}",
                            kind(&other)
                        )))
                    }
                };
                Ok(StatementOutcome {
                    rows,
                    rows_affected,
                    last_insert_rowid,
                })
            }
            other => Err(ExecutionError::Malformed(format!(
                "expected array or object, got {}",
                kind(&other)
            ))),
        }
    }
}

fn first_key<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

fn as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn object_rows(items: Vec<Value>) -> Result<Vec<Row>, ExecutionError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            other => Err(ExecutionError::Malformed(format!(
                "row must be an object, got {}",
                kind(&other)
            ))),
        })
        .collect()
}

fn column_names(columns: Vec<Value>) -> Result<Vec<String>, ExecutionError> {
    columns
        .into_iter()
        .map(|c| match c {
            Value::String(name) => Ok(name),
            Value::Object(mut obj) => match obj.remove("name") {
                Some(Value::String(name)) => Ok(name),
                _ => Err(ExecutionError::Malformed("column object without name".into())),
            },
            other => Err(ExecutionError::Malformed(format!(
                "column must be a string or object, got {}",
                kind(&other)
            ))),
        })
        .collect()
}

fn zipped_rows(columns: &[String], items: Vec<Value>) -> Result<Vec<Row>, ExecutionError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::Array(cells) if cells.len() == columns.len() => {
                Ok(columns.iter().cloned().zip(cells).collect())
            }
            Value::Array(cells) => Err(ExecutionError::Malformed(format!(
                "row has {} cells for {} columns",
                cells.len(),
                columns.len()
            ))),
            Value::Object(row) => Ok(row),
            other => Err(ExecutionError::Malformed(format!(
                "row must be an array, got {}",
                kind(&other)
            ))),
        })
        .collect()
}
