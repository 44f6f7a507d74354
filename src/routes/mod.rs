//! Route tables and the assembled application router.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::doc::ApiDoc;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Swagger UI at /api-docs over the document at /openapi.json.
pub fn docs_routes() -> Router {
    Router::new().merge(SwaggerUi::new("/api-docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Users CRUD, common routes and docs, with request tracing and a body size limit.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(user_routes(state.clone()))
        .merge(common_routes(state))
        .merge(docs_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
}
