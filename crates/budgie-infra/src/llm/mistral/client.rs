//! MistralProvider -- concrete [`LlmProvider`] implementation for the
//! Mistral chat-completions API.
//!
//! Sends authenticated POSTs to `{base_url}/chat/completions` with a
//! bearer credential. The API key is wrapped in [`secrecy::SecretString`]
//! and is never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use budgie_core::llm::provider::LlmProvider;
use budgie_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Default base URL for the Mistral API.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";

/// Mistral chat-completions provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. The struct does not derive
/// Debug, so the key cannot leak through formatting.
pub struct MistralProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl MistralProvider {
    /// Create a new Mistral provider against the public API.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (testing, proxies, compatible endpoints).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert a generic [`CompletionRequest`] into the wire format.
    fn to_chat_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

// MistralProvider intentionally does NOT derive Debug: the SecretString
// field protects the key from Display, and omitting Debug entirely keeps
// the whole struct out of formatted output.

impl LlmProvider for MistralProvider {
    fn name(&self) -> &str {
        "mistral"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_chat_request(request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                s if (500..600).contains(&s) => LlmError::Overloaded(error_body),
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                LlmError::Deserialization("response contained no choices".to_string())
            })?;

        Ok(CompletionResponse {
            content,
            model: completion.model,
        })
    }
}
