//! Request and response payloads, and the validation that turns a raw request into
//! trimmed fields.

use serde::{Deserialize, Serialize};

use crate::error::AffirmationError;

pub const NAME_MAX_CHARS: usize = 50;
pub const FEELING_MAX_CHARS: usize = 280;
pub const DETAILS_MAX_CHARS: usize = 600;

/// Body of `POST /api/affirmation`.
///
/// Missing `name` or `feeling` deserializes as an empty string so it takes the same
/// "required" path as a blank value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub feeling: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AffirmationRequest {
    pub fn new(
        name: impl Into<String>,
        feeling: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            feeling: feeling.into(),
            details,
        }
    }
}

/// Body of a successful response. `affirmation` is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffirmationResponse {
    pub affirmation: String,
}

/// Trimmed, length-checked request fields. `details` is empty when absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub name: String,
    pub feeling: String,
    pub details: String,
}

impl ValidatedRequest {
    /// Text inspected by the safety filter: feeling and details joined by a space.
    /// `name` is not included.
    pub fn safety_text(&self) -> String {
        format!("{} {}", self.feeling, self.details).trim().to_string()
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), AffirmationError> {
    if value.chars().count() > max {
        return Err(AffirmationError::TooLong { field, max });
    }
    Ok(())
}

/// Trims the fields and checks them.
///
/// Blank `name` or `feeling` fails with [`AffirmationError::MissingField`] before any length
/// check; lengths are then checked on the raw values.
pub fn validate(req: &AffirmationRequest) -> Result<ValidatedRequest, AffirmationError> {
    let name = req.name.trim();
    let feeling = req.feeling.trim();
    let details = req.details.as_deref().unwrap_or_default().trim();

    if name.is_empty() || feeling.is_empty() {
        return Err(AffirmationError::MissingField);
    }

    check_len("name", &req.name, NAME_MAX_CHARS)?;
    check_len("feeling", &req.feeling, FEELING_MAX_CHARS)?;
    if let Some(raw) = req.details.as_deref() {
        check_len("details", raw, DETAILS_MAX_CHARS)?;
    }

    Ok(ValidatedRequest {
        name: name.to_string(),
        feeling: feeling.to_string(),
        details: details.to_string(),
    })
}
