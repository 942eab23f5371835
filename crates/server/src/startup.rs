use axum::Router;
use configs::ServerConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a freshly seeded store.
pub fn build_app() -> Router {
    routes::build_router(AppState::seeded(), build_cors())
}

/// Bind `host:port`; `host` may be an IP or a resolvable name such as `localhost`.
pub async fn bind(cfg: &ServerConfig) -> anyhow::Result<TcpListener> {
    Ok(TcpListener::bind(cfg.bind_addr()).await?)
}

/// Public entry: build the app and run the HTTP server until it fails.
pub async fn run(cfg: ServerConfig) -> anyhow::Result<()> {
    let app = build_app();

    let listener = bind(&cfg).await?;
    let addr = listener.local_addr()?;
    info!(%addr, port = addr.port(), "Server listening on port {}", addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
