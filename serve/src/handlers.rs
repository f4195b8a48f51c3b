//! Route handlers.

use std::sync::Arc;

use affirm::{AffirmationRequest, AffirmationResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::app::AppState;
use super::response::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

/// `GET /health`. No input, no side effects.
pub(crate) async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

/// `POST /api/affirmation`.
///
/// Body extraction failures (not JSON, wrong types, missing content type) become 422 with a
/// fixed detail; everything else goes through [`affirm::AffirmationService::respond`].
pub(crate) async fn create_affirmation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AffirmationRequest>, JsonRejection>,
) -> Result<Json<AffirmationResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        debug!(error = %e, "affirmation body rejected");
        ApiError::invalid_body()
    })?;
    let resp = state.service.respond(&req).await?;
    Ok(Json(resp))
}
