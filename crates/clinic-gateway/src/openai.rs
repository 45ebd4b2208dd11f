//! Chat completions backend (current OpenAI API generation).

use async_trait::async_trait;
use clinic_core::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::backend::{map_http_error, map_request_error, CompletionBackend, CompletionRequest};

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Backend implementation that talks to the chat completions HTTP API.
#[derive(Clone)]
pub struct ChatCompletionsBackend {
    client: Client,
    api_key: String,
    model: String,
}

impl ChatCompletionsBackend {
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
impl CompletionBackend for ChatCompletionsBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let body = ChatCompletionBody {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt.clone(),
                },
            ],
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

        let parsed: ChatCompletionResponse = response.json().await.map_err(map_request_error)?;
        extract_text(parsed)
    }
}

#[derive(Serialize)]
struct ChatCompletionBody {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn extract_text(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            clinic_core::ClinicError::generation("chat completions response carried no content")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_takes_first_choice() {
        let response = ChatCompletionResponse {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some("ответ".to_string()),
                },
            }],
        };
        assert_eq!(extract_text(response).unwrap(), "ответ");
    }

    #[test]
    fn test_extract_text_rejects_empty_choices() {
        let response = ChatCompletionResponse { choices: vec![] };
        assert!(extract_text(response).is_err());
    }
}
