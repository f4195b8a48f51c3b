//! Error types for affirmation requests.
//!
//! [`GenerateError`] is the failure half of one upstream call; [`AffirmationError`] is
//! everything [`AffirmationService::respond`](crate::AffirmationService::respond) can
//! return. Neither carries credentials; upstream detail stays in the `Display` text for
//! logs and is never meant for clients.

use thiserror::Error;

/// Classified failure of the external generator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Upstream rejected the credential.
    #[error("upstream authentication failed")]
    Auth,

    /// Upstream rate limit or quota exceeded.
    #[error("upstream rate limit exceeded")]
    RateLimited,

    /// The call timed out or the upstream could not be reached.
    #[error("upstream timed out or unreachable: {0}")]
    TimeoutOrConnection(String),

    /// Anything else (unexpected status, undecodable body, transport error).
    #[error("upstream failure: {0}")]
    Unclassified(String),
}

/// Outcome of one request that did not produce an affirmation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AffirmationError {
    /// `name` or `feeling` is empty after trimming.
    #[error("name and feeling are required")]
    MissingField,

    /// A field is longer than allowed (counted in chars, before trimming).
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Upstream succeeded but returned only whitespace.
    #[error("generator returned empty text")]
    EmptyResponse,

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
