//! External text generator behind a trait.
//!
//! [`AffirmationService`](crate::AffirmationService) depends only on
//! [`AffirmationGenerator`]; [`OpenAiGenerator`] is the real upstream and
//! [`MockGenerator`] a fixed stand-in for tests.

mod mock;
mod openai;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::GenerateError;

pub use mock::MockGenerator;
pub use openai::OpenAiGenerator;

/// Result of one generator call: the raw generated text (possibly blank) or a classified
/// failure.
pub type GeneratorOutcome = Result<String, GenerateError>;

/// Produces text for a system instruction and a user message.
///
/// Implementations must return within roughly `timeout`, reporting an overrun as
/// [`GenerateError::TimeoutOrConnection`]. Shared read-only across requests.
#[async_trait]
pub trait AffirmationGenerator: Send + Sync {
    async fn generate(&self, system: &str, user: &str, timeout: Duration) -> GeneratorOutcome;
}
