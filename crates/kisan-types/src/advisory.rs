//! Advisory request/response types and provider identities.
//!
//! An advisory request carries a farming prompt plus an optional provider
//! and model. Every reply is a JSON envelope (`{content}` or `{error}`)
//! paired with an HTTP status code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AdvisoryError;

/// Upstream LLM vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    OpenRouter,
}

impl Provider {
    /// Resolve a provider from a raw request value.
    ///
    /// Only `"openrouter"` selects OpenRouter. Anything else, including an
    /// absent value, falls back to OpenAI.
    pub fn resolve(name: Option<&str>) -> Self {
        match name {
            Some("openrouter") => Provider::OpenRouter,
            _ => Provider::OpenAi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::OpenRouter => "openrouter",
        }
    }

    /// Base URL used when no override is configured.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::OpenRouter => "https://openrouter.ai/api/v1",
        }
    }

    /// Model used when the request does not name one.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4o-mini",
            Provider::OpenRouter => "openai/gpt-4o-mini",
        }
    }

    /// Environment variables holding the credential, in lookup order.
    pub fn credential_vars(&self) -> &'static [&'static str] {
        match self {
            Provider::OpenAi => &["OPENAI_API_KEY"],
            Provider::OpenRouter => &["OPENROUTER_API_KEY", "VERCEL_OIDC_TOKEN"],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated advisory request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    pub prompt: String,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AdvisoryRequest {
    /// Build a request for the default provider and model.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            provider: Provider::default(),
            model: None,
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Set an explicit model. Empty strings are ignored.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.model = (!model.is_empty()).then_some(model);
        self
    }
}

/// JSON body of an advisory reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Content { content: String },
    Error { error: String },
    Health { status: String, message: String },
}

/// Status code plus JSON body, independent of any HTTP framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl AdvisoryReply {
    pub const HEALTH_MESSAGE: &'static str = "LLM dev endpoint reachable. Use POST to query.";

    /// 200 with the advisory content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: ReplyBody::Content {
                content: content.into(),
            },
        }
    }

    /// Static health-check payload served by the development shim.
    pub fn health() -> Self {
        Self {
            status: 200,
            body: ReplyBody::Health {
                status: "ok".to_string(),
                message: Self::HEALTH_MESSAGE.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.body)
            .unwrap_or_else(|_| r#"{"error":"Unknown error"}"#.to_string())
    }
}

impl From<AdvisoryError> for AdvisoryReply {
    fn from(err: AdvisoryError) -> Self {
        Self {
            status: err.status_code(),
            body: ReplyBody::Error {
                error: err.to_string(),
            },
        }
    }
}
