//! Application state wiring the advisory service together.
//!
//! AppState holds the concrete service used by both servers and the CLI.
//! The service is generic over its transport; AppState pins it to the
//! reqwest-backed infra client. Only the credential source differs between
//! the production handler and the development shim.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use kisan_core::advisory::settings::{ProviderSettings, DEV_REFERER, PRODUCTION_REFERER};
use kisan_core::advisory::AdvisoryService;
use kisan_core::credential::CredentialSource;
use kisan_infra::credential::dotenv::DevEnvironment;
use kisan_infra::credential::env::EnvCredentialSource;
use kisan_infra::llm::openai_compat::OpenAiCompatClient;
use kisan_types::config::ProxyConfig;

pub type ConcreteAdvisoryService = AdvisoryService<OpenAiCompatClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub advisory: Arc<ConcreteAdvisoryService>,
    pub max_body_bytes: usize,
    pub web_dir: Option<PathBuf>,
}

impl AppState {
    /// Wire a service from explicit parts.
    pub fn new(
        config: &ProxyConfig,
        settings: ProviderSettings,
        credentials: Arc<dyn CredentialSource>,
    ) -> anyhow::Result<Self> {
        let client = OpenAiCompatClient::new()?;
        Ok(Self {
            advisory: Arc::new(AdvisoryService::new(settings, credentials, client)),
            max_body_bytes: config.server.max_body_bytes,
            web_dir: config.server.web_dir.clone(),
        })
    }

    /// Production handler: credentials from the process environment.
    pub fn production(config: &ProxyConfig) -> anyhow::Result<Self> {
        Self::new(
            config,
            ProviderSettings::from_config(config, PRODUCTION_REFERER),
            Arc::new(EnvCredentialSource::new()),
        )
    }

    /// Development shim: credentials from `.env` files for `mode` in
    /// `env_dir`, overlaid by the process environment.
    pub fn development(config: &ProxyConfig, env_dir: &Path, mode: &str) -> anyhow::Result<Self> {
        let env = DevEnvironment::load(env_dir, mode)?;
        tracing::info!(
            mode = env.mode(),
            files = env.loaded_files().len(),
            "loaded development environment"
        );
        Self::new(
            config,
            ProviderSettings::from_config(config, DEV_REFERER),
            Arc::new(env),
        )
    }

    /// Replace the SPA directory (CLI flag wins over config).
    pub fn with_web_dir(mut self, web_dir: Option<PathBuf>) -> Self {
        if web_dir.is_some() {
            self.web_dir = web_dir;
        }
        self
    }
}
