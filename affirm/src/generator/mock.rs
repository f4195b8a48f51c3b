//! Mock generator for tests and local substitution.
//!
//! Returns a fixed reply or a fixed failure and records how often it was called and with
//! which user message, so tests can assert the upstream was (or was not) reached.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{AffirmationGenerator, GeneratorOutcome};
use crate::error::GenerateError;

pub struct MockGenerator {
    outcome: GeneratorOutcome,
    calls: AtomicUsize,
    last_user: Mutex<Option<String>>,
}

impl MockGenerator {
    /// Always succeeds with `text` (returned as given, untrimmed).
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_outcome(Ok(text.into()))
    }

    /// Always fails with `err`.
    pub fn failing(err: GenerateError) -> Self {
        Self::with_outcome(Err(err))
    }

    pub fn with_outcome(outcome: GeneratorOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_user: Mutex::new(None),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// User message of the most recent call.
    pub fn last_user_message(&self) -> Option<String> {
        self.last_user.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl AffirmationGenerator for MockGenerator {
    async fn generate(&self, _system: &str, user: &str, _timeout: Duration) -> GeneratorOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.last_user.lock() {
            *g = Some(user.to_string());
        }
        self.outcome.clone()
    }
}
