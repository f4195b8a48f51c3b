//! Process-wide settings read from the environment once at startup.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Used when `FRONTEND_ORIGIN` is unset (local Next.js dev server).
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(20);
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    #[error("missing OPENAI_API_KEY environment variable")]
    MissingApiKey,
}

/// Upstream API credential. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Immutable configuration shared by the server and the CLI.
///
/// - `OPENAI_API_KEY` (required)
/// - `FRONTEND_ORIGIN` (default [`DEFAULT_FRONTEND_ORIGIN`])
/// - `OPENAI_BASE_URL` or `OPENAI_API_BASE` (default [`DEFAULT_OPENAI_BASE_URL`])
/// - `AFFIRM_MODEL` (default [`DEFAULT_MODEL`])
/// - `AFFIRM_UPSTREAM_TIMEOUT_SECS` (default 20; unparsable or zero falls back to default)
/// - `AFFIRM_ADDR` (default [`DEFAULT_ADDR`])
#[derive(Clone, Debug)]
pub struct Settings {
    pub openai_api_key: ApiKey,
    /// Only origin allowed to call the API cross-origin.
    pub frontend_origin: String,
    pub openai_base_url: String,
    pub model: String,
    /// Time box for one upstream call; does not bound the whole request.
    pub upstream_timeout: Duration,
    pub addr: String,
}

impl Settings {
    /// Settings with the given key and every other field at its default.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            openai_api_key: ApiKey::new(key),
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            addr: DEFAULT_ADDR.to_string(),
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let key = get("OPENAI_API_KEY").ok_or(SettingsError::MissingApiKey)?;
        let mut settings = Self::with_api_key(key);

        if let Some(origin) = get("FRONTEND_ORIGIN") {
            settings.frontend_origin = origin;
        }
        if let Some(base) = get("OPENAI_BASE_URL").or_else(|| get("OPENAI_API_BASE")) {
            settings.openai_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(model) = get("AFFIRM_MODEL") {
            settings.model = model;
        }
        if let Some(secs) = get("AFFIRM_UPSTREAM_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            settings.upstream_timeout = Duration::from_secs(secs);
        }
        if let Some(addr) = get("AFFIRM_ADDR") {
            settings.addr = addr;
        }
        Ok(settings)
    }
}
