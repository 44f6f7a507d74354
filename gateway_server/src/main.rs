//! Serves the users CRUD gateway.
//!
//! Reads `TURSO_API_URL` and `TURSO_API_KEY` (plus optional `HOST`, `PORT`, `TURSO_TIMEOUT_SECS`,
//! `MAX_BODY_BYTES`) from the environment or a `.env` file.
//!
//! Run from repo root: `cargo run -p gateway-server`

use crud_gateway::{app, AppState, GatewayConfig, HttpExecutor};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("crud_gateway=info,gateway_server=info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;
    let executor = HttpExecutor::new(&config)?;
    tracing::info!(endpoint = %executor.endpoint(), "remote store configured");
    let state = AppState::new(executor);

    let router = app(state, config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Server is running on http://{}", addr);
    tracing::info!("API docs on http://{}/api-docs", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
