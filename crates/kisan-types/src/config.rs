//! Configuration types for the Kisan proxy.
//!
//! `ProxyConfig` represents the top-level `kisan.toml`. Every section and
//! field is optional; unset values fall back to mode-specific defaults
//! chosen by the binary.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default cap on accumulated request bodies (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub openrouter: OpenRouterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Upper bound on request bodies read by either server.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// Directory of the built SPA. Served as the fallback when it exists.
    #[serde(default)]
    pub web_dir: Option<PathBuf>,
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            max_body_bytes: default_max_body_bytes(),
            web_dir: None,
        }
    }
}

/// Per-provider endpoint overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: EndpointConfig,

    #[serde(default)]
    pub openrouter: EndpointConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Replaces the vendor base URL (e.g. a gateway or a local fake).
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub default_model: Option<String>,
}

/// Attribution headers OpenRouter expects from calling apps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    #[serde(default)]
    pub referer: Option<String>,

    #[serde(default)]
    pub app_title: Option<String>,
}
