//! Remote statement execution: the `SqlExecutor` seam and its HTTP transport.

mod http;
mod outcome;

pub use http::HttpExecutor;
pub use outcome::{Row, StatementOutcome};

use crate::error::ExecutionError;
use crate::sql::Statement;
use async_trait::async_trait;

/// Runs one statement against the remote store. One attempt per call; failures are returned as-is.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<StatementOutcome, ExecutionError>;
}
