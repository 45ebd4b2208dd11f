//! The generation gateway: turns a prompt into natural-language text and
//! never fails past this boundary.

use std::sync::Arc;
use std::time::Duration;

use crate::backend::{ApiGeneration, CompletionBackend, CompletionRequest};
use crate::instruction::{FALLBACK_TEXT, SYSTEM_INSTRUCTION};
use crate::legacy::LegacyCompletionsBackend;
use crate::openai::ChatCompletionsBackend;

/// Answers are deliberately short; the system instruction caps them at a
/// couple of sentences and this bounds the tokens billed per reply.
const MAX_TOKENS: u32 = 100;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wraps the selected completion backend with the fixed system instruction,
/// sampling parameters, a bounded timeout and the operator fallback.
pub struct GenerationGateway {
    backend: Arc<dyn CompletionBackend>,
    system: &'static str,
    max_tokens: u32,
    temperature: f32,
    timeout: Duration,
}

impl GenerationGateway {
    /// Creates a gateway over the given backend with the standard
    /// instruction and sampling parameters.
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            system: SYSTEM_INSTRUCTION,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Builds the gateway for the configured provider API generation.
    pub fn for_generation(generation: ApiGeneration, api_key: &str, model: &str) -> Self {
        let backend: Arc<dyn CompletionBackend> = match generation {
            ApiGeneration::Chat => Arc::new(ChatCompletionsBackend::new(api_key, model)),
            ApiGeneration::Legacy => Arc::new(LegacyCompletionsBackend::new(api_key, model)),
        };
        Self::new(backend)
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generates the reply text for `prompt`.
    ///
    /// On any failure (transport, provider error, malformed response,
    /// timeout) logs a warning and returns the fixed operator fallback
    /// text. Callers can treat the result as always presentable.
    pub async fn generate(&self, prompt: &str) -> String {
        let request = CompletionRequest {
            system: self.system.to_string(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        match tokio::time::timeout(self.timeout, self.backend.complete(&request)).await {
            Ok(Ok(text)) => text.trim().to_string(),
            Ok(Err(err)) => {
                tracing::warn!("completion failed: {err}");
                FALLBACK_TEXT.to_string()
            }
            Err(_) => {
                tracing::warn!("completion timed out after {:?}", self.timeout);
                FALLBACK_TEXT.to_string()
            }
        }
    }
}
