//! ChatTransport trait definition.
//!
//! The advisory handler performs exactly one chat-completion call per
//! request through this trait. Implementations live in kisan-infra
//! (e.g., `OpenAiCompatClient`).

use secrecy::SecretString;

use kisan_types::advisory::Provider;
use kisan_types::error::LlmError;
use kisan_types::llm::{ChatCompletionRequest, ChatCompletionResponse};

/// Everything needed to address one upstream call.
///
/// Intentionally does not derive Debug; the credential stays out of logs.
pub struct UpstreamCall {
    pub provider: Provider,
    /// Full `.../chat/completions` URL.
    pub url: String,
    pub api_key: SecretString,
    /// Provider-specific headers sent in addition to auth and content type.
    pub extra_headers: Vec<(&'static str, String)>,
}

/// Trait for chat-completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). No retry,
/// backoff, or caching is expected of implementations: one call in, one
/// result out.
pub trait ChatTransport: Send + Sync {
    /// Send a completion request and receive the relayed parts of the response.
    ///
    /// A non-2xx upstream status must surface as [`LlmError::Upstream`]
    /// carrying the raw response body.
    fn complete(
        &self,
        call: &UpstreamCall,
        request: &ChatCompletionRequest,
    ) -> impl std::future::Future<Output = Result<ChatCompletionResponse, LlmError>> + Send;
}
