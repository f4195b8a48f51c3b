//! Maps [`AffirmationError`] to an HTTP status and a fixed `{"detail": ...}` body.
//!
//! Details are fixed strings; upstream error text and credentials never reach the client.

use affirm::{AffirmationError, GenerateError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

pub const DETAIL_REQUIRED: &str = "Name and feeling are required.";
pub const DETAIL_INVALID_BODY: &str = "Invalid request body.";
pub const DETAIL_EMPTY: &str = "AI returned an empty response.";
pub const DETAIL_MISCONFIGURED: &str = "AI service misconfigured. Please try again later.";
pub const DETAIL_BUSY: &str = "The AI service is busy right now. Please try again later.";
pub const DETAIL_TIMEOUT: &str = "The AI service timed out. Please try again.";
pub const DETAIL_GENERIC: &str =
    "We couldn't generate an affirmation right now. Please try again in a moment.";

/// Error body read by the frontend.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// An error response: status plus client-facing detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn invalid_body() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, DETAIL_INVALID_BODY)
    }
}

impl From<&AffirmationError> for ApiError {
    fn from(err: &AffirmationError) -> Self {
        match err {
            AffirmationError::MissingField => Self::new(StatusCode::BAD_REQUEST, DETAIL_REQUIRED),
            AffirmationError::TooLong { field, max } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{} must be at most {} characters.", field, max),
            ),
            AffirmationError::EmptyResponse => Self::new(StatusCode::BAD_GATEWAY, DETAIL_EMPTY),
            AffirmationError::Generate(GenerateError::Auth) => {
                Self::new(StatusCode::BAD_GATEWAY, DETAIL_MISCONFIGURED)
            }
            AffirmationError::Generate(GenerateError::RateLimited) => {
                Self::new(StatusCode::TOO_MANY_REQUESTS, DETAIL_BUSY)
            }
            AffirmationError::Generate(GenerateError::TimeoutOrConnection(_)) => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, DETAIL_TIMEOUT)
            }
            AffirmationError::Generate(GenerateError::Unclassified(_)) => {
                Self::new(StatusCode::BAD_GATEWAY, DETAIL_GENERIC)
            }
        }
    }
}

impl From<AffirmationError> for ApiError {
    fn from(err: AffirmationError) -> Self {
        Self::from(&err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
