//! The advisory proxy: validate, resolve, forward once, relay.
//!
//! [`handle_advisory_request`] is the one implementation of the proxy
//! contract. The production route and the development middleware in
//! kisan-api are thin adapters that hand it the method and raw body and
//! turn the resulting [`AdvisoryReply`] into an HTTP response.

pub mod settings;

use std::sync::Arc;

use serde_json::Value;
use tracing::Instrument;

use kisan_observe::genai_attrs::{span_name, OP_CHAT};
use kisan_types::advisory::{AdvisoryReply, AdvisoryRequest, Provider};
use kisan_types::error::AdvisoryError;
use kisan_types::llm::{ChatCompletionRequest, ADVISORY_TEMPERATURE};

use crate::credential::{resolve_credential, CredentialSource};
use crate::llm::transport::ChatTransport;

use self::settings::ProviderSettings;

/// Framework-independent view of an incoming proxy request.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryHttpRequest<'a> {
    pub method: &'a str,
    pub body: &'a [u8],
}

/// Parse a raw request body into an [`AdvisoryRequest`].
///
/// An empty body, `null`, or any non-object JSON value carries no prompt
/// and is rejected as [`AdvisoryError::InvalidPrompt`]. Malformed JSON is
/// an unexpected failure carrying the parser message.
pub fn parse_advisory_body(body: &[u8]) -> Result<AdvisoryRequest, AdvisoryError> {
    let value: Value = if body.is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(body).map_err(|e| AdvisoryError::unexpected(e.to_string()))?
    };

    let prompt = value
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .ok_or(AdvisoryError::InvalidPrompt)?;

    let provider = Provider::resolve(value.get("provider").and_then(Value::as_str));

    let model = value
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(String::from);

    Ok(AdvisoryRequest {
        prompt: prompt.to_string(),
        provider,
        model,
    })
}

/// Forward a validated request upstream and return the advisory content.
pub async fn forward_advisory<T: ChatTransport>(
    request: AdvisoryRequest,
    settings: &ProviderSettings,
    credentials: &dyn CredentialSource,
    transport: &T,
) -> Result<String, AdvisoryError> {
    let provider = request.provider;
    let endpoint = settings.endpoint(provider);
    let model = request
        .model
        .unwrap_or_else(|| endpoint.default_model.clone());

    let api_key = resolve_credential(credentials, provider).inspect_err(|_| {
        tracing::error!(provider = %provider, "missing API key");
    })?;

    let call = settings.upstream_call(provider, api_key);
    let chat = ChatCompletionRequest::advisory(model.as_str(), request.prompt);

    let span = tracing::info_span!(
        "chat",
        otel.name = %span_name(OP_CHAT, &model),
        gen_ai.operation.name = OP_CHAT,
        gen_ai.provider.name = provider.as_str(),
        gen_ai.request.model = %model,
        gen_ai.request.temperature = ADVISORY_TEMPERATURE,
        gen_ai.response.id = tracing::field::Empty,
        gen_ai.response.model = tracing::field::Empty,
    );

    async {
        tracing::info!(url = %call.url, model = %model, "calling upstream");

        let response = transport.complete(&call, &chat).await.map_err(|e| {
            tracing::error!(error = %e, "upstream call failed");
            AdvisoryError::from(e)
        })?;

        let span = tracing::Span::current();
        if let Some(id) = &response.id {
            span.record("gen_ai.response.id", id.as_str());
        }
        if let Some(response_model) = &response.model {
            span.record("gen_ai.response.model", response_model.as_str());
        }
        tracing::info!(content_length = response.content.len(), "upstream success");

        Ok::<_, AdvisoryError>(response.content)
    }
    .instrument(span)
    .await
}

/// Handle one proxy request end to end.
///
/// Never fails: every outcome, including unexpected errors, becomes an
/// [`AdvisoryReply`] with a status code and a JSON envelope.
pub async fn handle_advisory_request<T: ChatTransport>(
    request: AdvisoryHttpRequest<'_>,
    settings: &ProviderSettings,
    credentials: &dyn CredentialSource,
    transport: &T,
) -> AdvisoryReply {
    if request.method != "POST" {
        tracing::warn!(method = request.method, "method not allowed");
        return AdvisoryError::MethodNotAllowed.into();
    }

    let advisory = match parse_advisory_body(request.body) {
        Ok(advisory) => advisory,
        Err(err) => {
            tracing::warn!(error = %err, "rejected advisory body");
            return err.into();
        }
    };

    match forward_advisory(advisory, settings, credentials, transport).await {
        Ok(content) => AdvisoryReply::content(content),
        Err(err) => err.into(),
    }
}

/// Advisory handler bound to its settings, credential source, and transport.
///
/// Holds no per-request state; clones of the surrounding `Arc` are shared
/// across concurrent requests.
pub struct AdvisoryService<T: ChatTransport> {
    settings: ProviderSettings,
    credentials: Arc<dyn CredentialSource>,
    transport: T,
}

impl<T: ChatTransport> AdvisoryService<T> {
    pub fn new(
        settings: ProviderSettings,
        credentials: Arc<dyn CredentialSource>,
        transport: T,
    ) -> Self {
        Self {
            settings,
            credentials,
            transport,
        }
    }

    /// Handle a raw method + body pair.
    pub async fn handle(&self, method: &str, body: &[u8]) -> AdvisoryReply {
        handle_advisory_request(
            AdvisoryHttpRequest { method, body },
            &self.settings,
            self.credentials.as_ref(),
            &self.transport,
        )
        .await
    }

    /// Forward an already-built request.
    pub async fn advise(&self, request: AdvisoryRequest) -> Result<String, AdvisoryError> {
        if request.prompt.is_empty() {
            return Err(AdvisoryError::InvalidPrompt);
        }
        forward_advisory(
            request,
            &self.settings,
            self.credentials.as_ref(),
            &self.transport,
        )
        .await
    }
}
