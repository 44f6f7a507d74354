//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the users table.

use serde::Serialize;
use serde_json::Value;

pub const USERS_TABLE: &str = "users";

/// Quote identifier (safe: only from constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// SQL text with positional `?` placeholders and the values bound to them, in order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>) -> Self {
        Statement {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) {
        self.params.push(v);
    }
}

/// INSERT name and email; the store assigns the id.
pub fn insert_user(name: &str, email: &str) -> Statement {
    let mut q = Statement::new(format!(
        "INSERT INTO {} ({}, {}) VALUES (?, ?)",
        quoted(USERS_TABLE),
        quoted("name"),
        quoted("email")
    ));
    q.push_param(Value::String(name.to_string()));
    q.push_param(Value::String(email.to_string()));
    q
}

/// SELECT every user, no filter.
pub fn select_users() -> Statement {
    Statement::new(format!(
        "SELECT {}, {}, {} FROM {} ORDER BY {}",
        quoted("id"),
        quoted("name"),
        quoted("email"),
        quoted(USERS_TABLE),
        quoted("id")
    ))
}

/// UPDATE name and email by id. Params: name, email, id.
pub fn update_user(id: i64, name: &str, email: &str) -> Statement {
    let mut q = Statement::new(format!(
        "UPDATE {} SET {} = ?, {} = ? WHERE {} = ?",
        quoted(USERS_TABLE),
        quoted("name"),
        quoted("email"),
        quoted("id")
    ));
    q.push_param(Value::String(name.to_string()));
    q.push_param(Value::String(email.to_string()));
    q.push_param(Value::Number(id.into()));
    q
}

pub fn delete_user(id: i64) -> Statement {
    let mut q = Statement::new(format!(
        "DELETE FROM {} WHERE {} = ?",
        quoted(USERS_TABLE),
        quoted("id")
    ));
    q.push_param(Value::Number(id.into()));
    q
}

/// Liveness probe statement for the readiness route.
pub fn ping() -> Statement {
    Statement::new("SELECT 1")
}
