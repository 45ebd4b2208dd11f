//! Completion backend abstraction.
//!
//! Each supported provider API generation gets its own implementation;
//! the binary selects one at startup from configuration. The gateway only
//! sees this trait.

use async_trait::async_trait;
use clinic_core::error::{ClinicError, Result};
use reqwest::StatusCode;
use serde::Deserialize;

/// One completion request: the fixed system instruction plus the
/// caller-built prompt and sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// A language-completion provider.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Returns the completion text for the request.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Which provider API generation to talk to. Selected once at startup;
/// there is no per-call fallback between generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiGeneration {
    /// The chat completions API (current).
    #[default]
    Chat,
    /// The plain completions API (pre-chat deployments).
    Legacy,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Maps a non-success HTTP response to a [`ClinicError`], extracting the
/// provider's error message when the body parses.
pub(crate) fn map_http_error(status: StatusCode, body: String) -> ClinicError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    ClinicError::generation(format!("provider returned {status}: {message}"))
}

/// Maps a transport-level reqwest failure to a [`ClinicError`].
pub(crate) fn map_request_error(err: reqwest::Error) -> ClinicError {
    ClinicError::generation(format!("completion request failed: {err}"))
}
