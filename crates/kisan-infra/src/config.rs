//! Configuration loader for Kisan.
//!
//! Reads `kisan.toml` and deserializes it into [`ProxyConfig`]. Falls back
//! to defaults when the file is missing or malformed.

use std::path::Path;

use kisan_types::config::ProxyConfig;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kisan.toml";

/// Load proxy configuration from `path`.
///
/// - If the file does not exist, returns [`ProxyConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_proxy_config(path: &Path) -> ProxyConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ProxyConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ProxyConfig::default();
        }
    };

    match toml::from_str::<ProxyConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ProxyConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kisan_types::config::DEFAULT_MAX_BODY_BYTES;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_proxy_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_proxy_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).await;
        assert!(config.server.port.is_none());
        assert_eq!(config.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[tokio::test]
    async fn load_proxy_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 3100

[providers.openai]
base_url = "http://127.0.0.1:4010/v1"
"#,
        )
        .await
        .unwrap();

        let config = load_proxy_config(&path).await;
        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.port, Some(3100));
        assert_eq!(
            config.providers.openai.base_url.as_deref(),
            Some("http://127.0.0.1:4010/v1")
        );
    }

    #[tokio::test]
    async fn load_proxy_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_proxy_config(&path).await;
        assert!(config.server.host.is_none());
        assert!(config.providers.openrouter.base_url.is_none());
    }
}
