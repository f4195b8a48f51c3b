//! OpenAI Responses API client implementing [`AffirmationGenerator`].
//!
//! One `POST {base}/responses` per call with a system and a user input message. The
//! generated text is the concatenation of every `output_text` part in `output[*].content`
//! (or the top-level `output_text` when a proxy provides it).
//!
//! Failures are classified from the HTTP status and the transport error:
//!
//! | Upstream | [`GenerateError`] |
//! |---|---|
//! | 401 | `Auth` |
//! | 429 | `RateLimited` |
//! | timeout / connect failure | `TimeoutOrConnection` |
//! | anything else | `Unclassified` |
//!
//! There are no retries. Upstream error bodies are dropped: a 401 body echoes a masked
//! fragment of the key.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use config::{ApiKey, Settings};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::{AffirmationGenerator, GeneratorOutcome};
use crate::error::GenerateError;

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CreateResponse<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponseBody {
    fn text(self) -> String {
        if let Some(t) = self.output_text {
            return t;
        }
        self.output
            .into_iter()
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect()
    }
}

/// Real upstream. Holds one pooled HTTP client for the life of the process.
pub struct OpenAiGenerator {
    http: reqwest::Client,
    api_key: ApiKey,
    url: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: ApiKey,
        base_url: &str,
        model: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            api_key,
            url: Self::responses_url(base_url),
            model: model.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Self::new(
            settings.openai_api_key.clone(),
            &settings.openai_base_url,
            settings.model.clone(),
        )
    }

    /// `{base}/responses`, adding `/v1` when the base does not already end with it.
    fn responses_url(base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/responses", base)
        } else {
            format!("{}/v1/responses", base)
        }
    }

    fn classify_status(status: StatusCode) -> GenerateError {
        match status {
            StatusCode::UNAUTHORIZED => GenerateError::Auth,
            StatusCode::TOO_MANY_REQUESTS => GenerateError::RateLimited,
            other => GenerateError::Unclassified(format!("unexpected status {}", other)),
        }
    }

    /// Any failure to send the request or read the body, including a peer that closes or
    /// resets the connection mid-exchange, is a connection failure.
    fn classify_transport(err: reqwest::Error) -> GenerateError {
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            GenerateError::TimeoutOrConnection(err.to_string())
        } else {
            GenerateError::Unclassified(err.to_string())
        }
    }
}

#[async_trait]
impl AffirmationGenerator for OpenAiGenerator {
    async fn generate(&self, system: &str, user: &str, timeout: Duration) -> GeneratorOutcome {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let body = CreateResponse {
            model: &self.model,
            input: [
                InputMessage {
                    role: "system",
                    content: system,
                },
                InputMessage {
                    role: "user",
                    content: user,
                },
            ],
        };
        debug!(
            trace_id = %trace_id,
            url = %self.url,
            model = %self.model,
            timeout_ms = timeout.as_millis() as u64,
            "OpenAI responses create"
        );

        let started = Instant::now();
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(self.api_key.expose())
            .timeout(timeout)
            .json(&body)
            .send()
            .await
            .map_err(Self::classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(trace_id = %trace_id, status = %status, "OpenAI responses rejected");
            return Err(Self::classify_status(status));
        }

        let bytes = response.bytes().await.map_err(Self::classify_transport)?;
        trace!(trace_id = %trace_id, bytes = bytes.len(), "OpenAI response body received");
        let parsed: ResponseBody = serde_json::from_slice(&bytes)
            .map_err(|e| GenerateError::Unclassified(format!("decode response: {}", e)))?;

        debug!(
            trace_id = %trace_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "OpenAI responses done"
        );
        Ok(parsed.text())
    }
}
