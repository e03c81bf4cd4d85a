//! HTTP client for the OpenAI chat completions API.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use di::{inject, injectable};
use log::error;
use serde::Deserialize;

use crate::core::assistant::ChatMessage;
use crate::core::errors::ChatError;
use crate::infrastructure::traits::CompletionClient;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
// The upstream call has no retry; a hung request should not hold the
// connection open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Deserialize)]
struct ApiChoiceMessage {
    content: String,
}

/// Speaks the `POST /v1/chat/completions` protocol.
///
/// Implements [`CompletionClient`] so the chat service stays decoupled from
/// transport and serialization details. Configuration comes from the
/// environment:
///
/// ```text
/// OPENAI_API_KEY=sk-...                      (required)
/// OPENAI_BASE_URL=https://api.openai.com     (default)
/// ```
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

#[injectable(CompletionClient)]
impl OpenAiClient {
    #[inject]
    pub fn create() -> OpenAiClient {
        dotenvy::dotenv().ok();
        let api_key = env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        OpenAiClient::new(api_key, base_url)
    }
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{COMPLETIONS_PATH}", base.trim_end_matches('/'));
        OpenAiClient {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        let request = ApiRequest {
            model,
            messages: messages
                .iter()
                .map(|m| ApiMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Completion(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("completion API returned {status}: {body}");
            return Err(ChatError::Completion(format!(
                "completion API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            ChatError::Completion(format!("failed to parse completion response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ChatError::Completion("completion response contained no choices".to_owned()))
    }
}
