//! Affirm: short supportive affirmations from a name, a feeling, and optional details.
//!
//! One request is one pass through [`AffirmationService::respond`]:
//!
//! 1. [`validate`] trims the fields and rejects blank or over-long input.
//! 2. [`looks_like_self_harm`] checks feeling + details; a hit returns
//!    [`safety_message`] without calling out.
//! 3. Otherwise the [`AffirmationGenerator`] is called with [`SYSTEM_PROMPT`] and
//!    [`user_prompt`], bounded by the configured timeout.
//!
//! Failures are [`AffirmationError`]; upstream failures are the [`GenerateError`] sum type,
//! so callers map every case explicitly.

mod error;
mod generator;
mod model;
mod prompt;
mod safety;
mod service;

pub use error::{AffirmationError, GenerateError};
pub use generator::{AffirmationGenerator, GeneratorOutcome, MockGenerator, OpenAiGenerator};
pub use model::{
    validate, AffirmationRequest, AffirmationResponse, ValidatedRequest, DETAILS_MAX_CHARS,
    FEELING_MAX_CHARS, NAME_MAX_CHARS,
};
pub use prompt::{user_prompt, NO_DETAILS, SYSTEM_PROMPT};
pub use safety::{looks_like_self_harm, safety_message, SELF_HARM_MARKERS};
pub use service::{AffirmationService, Branch};
