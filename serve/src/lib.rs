//! HTTP server for affirm (axum).
//!
//! Listens on `AFFIRM_ADDR` (default 127.0.0.1:8000) and serves `GET /health` and
//! `POST /api/affirmation`.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`router`], [`AppState`].

mod app;
mod handlers;
mod response;

use std::future::Future;

use config::Settings;
use tokio::net::TcpListener;
use tracing::info;

pub use app::{router, AppState, BuildError};
pub use handlers::Health;
pub use response::{
    ApiError, ErrorBody, DETAIL_BUSY, DETAIL_EMPTY, DETAIL_GENERIC, DETAIL_INVALID_BODY,
    DETAIL_MISCONFIGURED, DETAIL_REQUIRED, DETAIL_TIMEOUT,
};

/// Serves `app` on an existing listener until `shutdown` resolves. Used by tests (bind to
/// 127.0.0.1:0, then pass the listener).
pub async fn run_serve_on_listener<F>(
    listener: TcpListener,
    app: axum::Router,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("affirm server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("affirm server stopped");
    Ok(())
}

/// Builds the real upstream client from `settings` and serves on `addr` (default
/// `settings.addr`) until Ctrl-C.
pub async fn run_serve(
    settings: &Settings,
    addr: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState::from_settings(settings)?;
    let app = router(state, &settings.frontend_origin)?;
    info!(
        frontend_origin = %settings.frontend_origin,
        model = %settings.model,
        upstream_timeout_secs = settings.upstream_timeout.as_secs(),
        "affirm server configured"
    );
    let listener = TcpListener::bind(addr.unwrap_or(settings.addr.as_str())).await?;
    run_serve_on_listener(listener, app, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
