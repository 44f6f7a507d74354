//! User CRUD: pairs each operation's statement with the shared executor.

use crate::error::ExecutionError;
use crate::executor::{Row, SqlExecutor, StatementOutcome};
use crate::models::UserInput;
use crate::sql::{delete_user, insert_user, ping, select_users, update_user};

pub struct UserService;

impl UserService {
    pub async fn create(
        executor: &dyn SqlExecutor,
        input: &UserInput,
    ) -> Result<StatementOutcome, ExecutionError> {
        executor.execute(&insert_user(&input.name, &input.email)).await
    }

    /// All users, in the order the store returns them.
    pub async fn list(executor: &dyn SqlExecutor) -> Result<Vec<Row>, ExecutionError> {
        Ok(executor.execute(&select_users()).await?.rows)
    }

    /// Sends the update even if no row has this id; `rows_affected` in the outcome tells.
    pub async fn update(
        executor: &dyn SqlExecutor,
        id: i64,
        input: &UserInput,
    ) -> Result<StatementOutcome, ExecutionError> {
        executor.execute(&update_user(id, &input.name, &input.email)).await
    }

    pub async fn delete(executor: &dyn SqlExecutor, id: i64) -> Result<StatementOutcome, ExecutionError> {
        executor.execute(&delete_user(id)).await
    }

    pub async fn ping(executor: &dyn SqlExecutor) -> Result<(), ExecutionError> {
        executor.execute(&ping()).await.map(|_| ())
    }
}
