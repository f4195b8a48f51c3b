//! Request handling: validate → normalize → safety check → generate.
//!
//! [`AffirmationService`] owns the shared generator handle and the upstream timeout. It is
//! built once at startup and shared read-only by every request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::error::AffirmationError;
use crate::generator::AffirmationGenerator;
use crate::model::{validate, AffirmationRequest, AffirmationResponse};
use crate::prompt::{user_prompt, SYSTEM_PROMPT};
use crate::safety::{looks_like_self_harm, safety_message};

/// Which branch produced a response. Logged, never sent to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    SafetyFallback,
    Generated,
}

pub struct AffirmationService {
    generator: Arc<dyn AffirmationGenerator>,
    timeout: Duration,
}

impl AffirmationService {
    pub fn new(generator: Arc<dyn AffirmationGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Produces an affirmation for `req`.
    ///
    /// Validation errors are returned before any upstream call. Flagged requests get the
    /// fixed safety message and never reach the generator. Otherwise the generator's text is
    /// returned trimmed; blank text is [`AffirmationError::EmptyResponse`].
    pub async fn respond(
        &self,
        req: &AffirmationRequest,
    ) -> Result<AffirmationResponse, AffirmationError> {
        self.respond_with_branch(req).await.map(|(resp, _)| resp)
    }

    /// Same as [`respond`](Self::respond), also reporting the branch taken.
    pub async fn respond_with_branch(
        &self,
        req: &AffirmationRequest,
    ) -> Result<(AffirmationResponse, Branch), AffirmationError> {
        let v = validate(req)?;

        if looks_like_self_harm(&v.safety_text()) {
            info!("safety fallback triggered; generator skipped");
            let resp = AffirmationResponse {
                affirmation: safety_message(&v.name),
            };
            return Ok((resp, Branch::SafetyFallback));
        }

        let user = user_prompt(&v.name, &v.feeling, &v.details);
        debug!(
            has_details = !v.details.is_empty(),
            timeout_ms = self.timeout.as_millis() as u64,
            "calling generator"
        );
        let text = self
            .generator
            .generate(SYSTEM_PROMPT, &user, self.timeout)
            .await
            .map_err(|e| {
                warn!(error = %e, "generator failed");
                AffirmationError::from(e)
            })?;

        let text = text.trim();
        if text.is_empty() {
            warn!("generator returned empty text");
            return Err(AffirmationError::EmptyResponse);
        }
        Ok((
            AffirmationResponse {
                affirmation: text.to_string(),
            },
            Branch::Generated,
        ))
    }
}
