//! OpenAI-compatible chat-completions transport.
//!
//! A single [`OpenAiCompatClient`] serves OpenAI and OpenRouter; the target
//! URL and provider headers arrive with each [`UpstreamCall`]. Requests go
//! through plain reqwest so non-2xx bodies can be relayed verbatim.

use secrecy::ExposeSecret;
use serde_json::Value;

use kisan_core::llm::transport::{ChatTransport, UpstreamCall};
use kisan_types::error::LlmError;
use kisan_types::llm::{ChatCompletionRequest, ChatCompletionResponse};

/// Reusable HTTP client for chat-completion calls.
///
/// No timeout is configured beyond reqwest's defaults, and nothing is
/// retried.
#[derive(Clone)]
pub struct OpenAiCompatClient {
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    pub fn new() -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kisan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (shared pools, custom TLS, tests).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ChatTransport for OpenAiCompatClient {
    async fn complete(
        &self,
        call: &UpstreamCall,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let mut builder = self
            .client
            .post(&call.url)
            .bearer_auth(call.api_key.expose_secret())
            .json(request);

        for (name, value) in &call.extra_headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| LlmError::Transport(format!("failed to read error body: {e}")))?;
            tracing::debug!(
                provider = %call.provider,
                status = status.as_u16(),
                "upstream returned error status"
            );
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        Ok(ChatCompletionResponse::from_value(&value))
    }
}
