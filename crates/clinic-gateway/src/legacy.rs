//! Plain completions backend (pre-chat API generation).
//!
//! Kept for deployments still pinned to the old endpoint. The system
//! instruction has no dedicated slot there, so it is concatenated ahead of
//! the prompt.

use async_trait::async_trait;
use clinic_core::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::{map_http_error, map_request_error, CompletionBackend, CompletionRequest};

const BASE_URL: &str = "https://api.openai.com/v1/completions";

/// Backend implementation for the plain completions HTTP API.
#[derive(Clone)]
pub struct LegacyCompletionsBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl LegacyCompletionsBackend {
    /// Creates a new backend with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl CompletionBackend for LegacyCompletionsBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = CompletionBody {
            model: self.model.clone(),
            prompt: format!("{}\n\n{}", request.system, request.prompt),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: CompletionResponse = response.json().await.map_err(map_request_error)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| {
                clinic_core::ClinicError::generation("completions response carried no choices")
            })
    }
}

#[derive(Serialize)]
struct CompletionBody {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}
