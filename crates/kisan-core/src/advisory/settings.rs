//! Per-provider endpoint settings.
//!
//! Resolved once from [`ProxyConfig`] at startup. Each request only reads
//! them; credentials are not part of the settings and are looked up per
//! request.

use secrecy::SecretString;

use kisan_types::advisory::Provider;
use kisan_types::config::{EndpointConfig, ProxyConfig};

use crate::llm::transport::UpstreamCall;

/// OpenRouter referer sent by the production handler.
pub const PRODUCTION_REFERER: &str = "http://localhost:5173";

/// OpenRouter referer sent by the development shim.
pub const DEV_REFERER: &str = "http://localhost:8080";

pub const DEFAULT_APP_TITLE: &str = "KisanAI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoint {
    pub base_url: String,
    pub default_model: String,
}

impl ProviderEndpoint {
    fn resolve(provider: Provider, config: &EndpointConfig) -> Self {
        Self {
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| provider.default_base_url().to_string()),
            default_model: config
                .default_model
                .clone()
                .unwrap_or_else(|| provider.default_model().to_string()),
        }
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub openai: ProviderEndpoint,
    pub openrouter: ProviderEndpoint,
    pub referer: String,
    pub app_title: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self::from_config(&ProxyConfig::default(), PRODUCTION_REFERER)
    }
}

impl ProviderSettings {
    /// Resolve settings, using `default_referer` when the config names none.
    pub fn from_config(config: &ProxyConfig, default_referer: &str) -> Self {
        Self {
            openai: ProviderEndpoint::resolve(Provider::OpenAi, &config.providers.openai),
            openrouter: ProviderEndpoint::resolve(
                Provider::OpenRouter,
                &config.providers.openrouter,
            ),
            referer: config
                .openrouter
                .referer
                .clone()
                .unwrap_or_else(|| default_referer.to_string()),
            app_title: config
                .openrouter
                .app_title
                .clone()
                .unwrap_or_else(|| DEFAULT_APP_TITLE.to_string()),
        }
    }

    pub fn endpoint(&self, provider: Provider) -> &ProviderEndpoint {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::OpenRouter => &self.openrouter,
        }
    }

    /// Address an upstream call for `provider` with the resolved key.
    pub fn upstream_call(&self, provider: Provider, api_key: SecretString) -> UpstreamCall {
        let extra_headers = match provider {
            Provider::OpenRouter => vec![
                ("HTTP-Referer", self.referer.clone()),
                ("X-Title", self.app_title.clone()),
            ],
            Provider::OpenAi => Vec::new(),
        };

        UpstreamCall {
            provider,
            url: self.endpoint(provider).chat_completions_url(),
            api_key,
            extra_headers,
        }
    }
}
