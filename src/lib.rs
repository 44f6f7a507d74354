//! crud-gateway: REST facade for a users table on a remote SQL-over-HTTP database.

pub mod config;
pub mod doc;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::GatewayConfig;
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError, ExecutionError};
pub use executor::{HttpExecutor, Row, SqlExecutor, StatementOutcome};
pub use models::{User, UserInput};
pub use routes::{app, common_routes, docs_routes, user_routes};
pub use service::UserService;
pub use state::AppState;
