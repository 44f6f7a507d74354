//! Shared application state for all routes.

use crate::executor::SqlExecutor;
use std::sync::Arc;

/// Built once before serving; handlers only read it.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<dyn SqlExecutor>,
}

impl AppState {
    pub fn new(executor: impl SqlExecutor + 'static) -> Self {
        AppState {
            executor: Arc::new(executor),
        }
    }
}
