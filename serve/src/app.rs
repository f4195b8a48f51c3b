//! Axum app: shared state, CORS policy, and router.
//!
//! Routes:
//! - `GET /health` → `{"ok": true}`
//! - `POST /api/affirmation` → `{"affirmation": ...}` or `{"detail": ...}`
//!
//! CORS admits only the configured frontend origin, with credentials, for `POST` and
//! `OPTIONS`. Request headers are mirrored because a wildcard cannot be combined with
//! credentials.

use std::sync::Arc;

use affirm::{AffirmationService, OpenAiGenerator};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use config::Settings;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{create_affirmation, health};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid FRONTEND_ORIGIN {0:?}")]
    InvalidOrigin(String),
    #[error("build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Shared state for handlers. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub(crate) service: Arc<AffirmationService>,
}

impl AppState {
    pub fn new(service: Arc<AffirmationService>) -> Self {
        Self { service }
    }

    /// Builds the real upstream client and service from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, BuildError> {
        let generator = OpenAiGenerator::from_settings(settings)?;
        let service = AffirmationService::new(Arc::new(generator), settings.upstream_timeout);
        Ok(Self::new(Arc::new(service)))
    }
}

fn cors_layer(frontend_origin: &str) -> Result<CorsLayer, BuildError> {
    let origin = HeaderValue::from_str(frontend_origin)
        .map_err(|_| BuildError::InvalidOrigin(frontend_origin.to_string()))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_credentials(true)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Builds the router with CORS and request tracing.
pub fn router(state: AppState, frontend_origin: &str) -> Result<Router, BuildError> {
    Ok(Router::new()
        .route("/health", get(health))
        .route("/api/affirmation", post(create_affirmation))
        .layer(cors_layer(frontend_origin)?)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state)))
}
