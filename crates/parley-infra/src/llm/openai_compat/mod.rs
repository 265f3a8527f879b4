//! OpenAI-compatible completion provider.
//!
//! Speaks the chat completions protocol (`POST {base_url}/chat/completions`)
//! over plain `reqwest` + JSON. Non-streaming only: one request, one answer.

pub mod config;
pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use parley_core::llm::provider::LlmProvider;
use parley_types::error::ConfigError;
use parley_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use self::config::OpenAiCompatConfig;
use self::types::{ChatCompletionRequest, ChatCompletionResponse, WireMessage};

/// Completion provider for any OpenAI-compatible endpoint (kluster.ai by default).
///
/// # API Key Security
///
/// The key is held as a [`SecretString`] and only exposed when building the
/// `Authorization` header. The type does not implement `Debug`.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    provider_name: String,
    base_url: String,
    api_key: SecretString,
    model: String,
    timeout: Duration,
}

impl OpenAiCompatibleProvider {
    /// Create a provider. The HTTP client enforces `config.timeout` on the
    /// whole exchange.
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            provider_name: config.provider_name,
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
            timeout: config.timeout,
        })
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionRequest {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatCompletionRequest {
            model,
            messages: request
                .messages
                .iter()
                .map(|turn| WireMessage {
                    role: turn.role.to_string(),
                    content: turn.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    fn map_reqwest_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Transport(e.to_string())
        }
    }
}

/// Reduce a successful payload to its first choice.
fn first_choice(body: ChatCompletionResponse) -> Result<CompletionResponse, LlmError> {
    let content = body
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::UnexpectedResponse("response has no choices".to_string()))?
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| {
            LlmError::UnexpectedResponse("first choice has no message content".to_string())
        })?;

    Ok(CompletionResponse {
        id: body.id,
        content,
        model: body.model,
        usage: body.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        }),
    })
}

// OpenAiCompatibleProvider intentionally does NOT derive Debug.

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(
                provider = %self.provider_name,
                status = status.as_u16(),
                body = %error_body,
                "completion endpoint returned an error status"
            );
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                code => LlmError::Status {
                    status: code,
                    body: error_body,
                },
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::UnexpectedResponse(format!("failed to parse response: {e}")))?;

        let completion = first_choice(parsed)?;
        if let Some(usage) = &completion.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "token usage"
            );
        }
        Ok(completion)
    }
}
