//! Liveness, readiness and build metadata.

use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn alive() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

// One `SELECT 1` round trip; any execution error means the store is not usable yet.
async fn readiness(State(state): State<AppState>) -> Response {
    match UserService::ping(state.executor.as_ref()).await {
        Ok(()) => Json(Readiness {
            status: "ok",
            database: "ok",
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
                .into_response()
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BUILD)
}

pub fn common_routes(state: AppState) -> Router {
    let meta = get(build_info);
    Router::new()
        .route("/health", get(alive))
        .route("/ready", get(readiness))
        .route("/version", meta.clone())
        .route("/info", meta)
        .with_state(state)
}
