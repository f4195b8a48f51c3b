//! Library side of the `affirm` binary: the one-shot `once` command.
//!
//! `once` runs the same [`AffirmationService`] the server uses and reports failures with the
//! same client-facing detail the HTTP API would return.

use std::sync::Arc;

use affirm::{AffirmationRequest, AffirmationResponse, AffirmationService, OpenAiGenerator};
use config::Settings;
use serve::{ApiError, BuildError};

/// Inputs of `affirm once`.
#[derive(Debug, Clone, Default)]
pub struct OnceInput {
    pub name: String,
    pub feeling: String,
    pub details: Option<String>,
    /// Print `{"affirmation": ...}` instead of the bare text.
    pub json: bool,
}

/// Builds the service backed by the configured OpenAI upstream.
pub fn service_from_settings(settings: &Settings) -> Result<AffirmationService, BuildError> {
    let generator = OpenAiGenerator::from_settings(settings)?;
    Ok(AffirmationService::new(
        Arc::new(generator),
        settings.upstream_timeout,
    ))
}

/// Renders a successful response for stdout.
pub fn render(resp: &AffirmationResponse, json: bool) -> String {
    if json {
        serde_json::to_string(resp).unwrap_or_else(|_| resp.affirmation.clone())
    } else {
        resp.affirmation.clone()
    }
}

/// Runs one request. On failure returns the mapped [`ApiError`] (status + detail).
pub async fn run_once(service: &AffirmationService, input: &OnceInput) -> Result<String, ApiError> {
    let req = AffirmationRequest::new(
        input.name.clone(),
        input.feeling.clone(),
        input.details.clone(),
    );
    let resp = service.respond(&req).await?;
    Ok(render(&resp, input.json))
}
