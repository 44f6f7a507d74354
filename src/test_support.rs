//! In-process executors for unit tests.

use crate::error::ExecutionError;
use crate::executor::{Row, SqlExecutor, StatementOutcome};
use crate::sql::{delete_user, insert_user, ping, select_users, update_user, Statement};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Table {
    last_id: i64,
    users: BTreeMap<i64, (String, String)>,
}

/// Users table kept in memory. Understands exactly the statements the `sql` module builds.
#[derive(Clone, Default)]
pub struct InMemoryExecutor {
    table: Arc<Mutex<Table>>,
    executed: Arc<Mutex<Vec<Statement>>>,
}

impl InMemoryExecutor {
    pub fn executed(&self) -> Vec<Statement> {
        self.executed.lock().unwrap().clone()
    }
}

fn text(v: &Value) -> String {
    v.as_str().unwrap_or_default().to_string()
}

fn mutation(rows_affected: u64, last_insert_rowid: Option<i64>) -> StatementOutcome {
    StatementOutcome {
        rows: Vec::new(),
        rows_affected: Some(rows_affected),
        last_insert_rowid,
    }
}

#[async_trait]
impl SqlExecutor for InMemoryExecutor {
    async fn execute(&self, statement: &Statement) -> Result<StatementOutcome, ExecutionError> {
        self.executed.lock().unwrap().push(statement.clone());
        let mut table = self.table.lock().unwrap();
        let p = &statement.params;
        let sql = statement.sql.as_str();

        if sql == insert_user("", "").sql {
            table.last_id += 1;
            let id = table.last_id;
            table.users.insert(id, (text(&p[0]), text(&p[1])));
            Ok(mutation(1, Some(id)))
        } else if sql == select_users().sql {
            let rows = table
                .users
                .iter()
                .map(|(id, (name, email))| {
                    let row = json!({"id": id, "name": name, "email": email});
                    match row {
                        Value::Object(m) => m,
                        _ => Row::new(),
                    }
                })
                .collect();
            Ok(StatementOutcome {
                rows,
                ..Default::default()
            })
        } else if sql == update_user(0, "", "").sql {
            let id = p[2].as_i64().unwrap_or_default();
            let (name, email) = (text(&p[0]), text(&p[1]));
            match table.users.get_mut(&id) {
                Some(user) => {
                    *user = (name, email);
                    Ok(mutation(1, None))
                }
                None => Ok(mutation(0, None)),
            }
        } else if sql == delete_user(0).sql {
            let id = p[0].as_i64().unwrap_or_default();
            let removed = table.users.remove(&id).is_some();
            Ok(mutation(u64::from(removed), None))
        } else if sql == ping().sql {
            Ok(StatementOutcome::default())
        } else {
            Err(ExecutionError::Remote(format!("unsupported statement: {}", sql)))
        }
    }
}

/// Every call fails as if the remote store were down.
pub struct FailingExecutor;

#[async_trait]
impl SqlExecutor for FailingExecutor {
    async fn execute(&self, _statement: &Statement) -> Result<StatementOutcome, ExecutionError> {
        Err(ExecutionError::Transport("connection refused".into()))
    }
}
