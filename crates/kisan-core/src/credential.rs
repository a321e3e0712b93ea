//! Credential lookup.
//!
//! Credentials are read from a [`CredentialSource`] on every request and
//! never cached by the proxy.

use std::collections::HashMap;

use secrecy::SecretString;

use kisan_types::advisory::Provider;
use kisan_types::error::AdvisoryError;

/// Read-only key/value source of provider credentials.
pub trait CredentialSource: Send + Sync {
    /// Returns None if the key is not set in this source.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory credential source.
#[derive(Default)]
pub struct MapCredentialSource {
    values: HashMap<String, String>,
}

impl MapCredentialSource {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapCredentialSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl CredentialSource for MapCredentialSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Resolve the API key for `provider`.
///
/// Checks the provider's variables in order and returns the first non-empty
/// value. Fails with [`AdvisoryError::MissingCredential`] naming every
/// variable that was consulted.
pub fn resolve_credential(
    source: &dyn CredentialSource,
    provider: Provider,
) -> Result<SecretString, AdvisoryError> {
    provider
        .credential_vars()
        .iter()
        .filter_map(|var| source.get(var))
        .find(|value| !value.is_empty())
        .map(SecretString::from)
        .ok_or_else(|| AdvisoryError::missing_credential(provider))
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_resolve_openai_key() {
        let source = MapCredentialSource::from_iter([("OPENAI_API_KEY", "sk-test")]);
        let key = resolve_credential(&source, Provider::OpenAi).unwrap();
        assert_eq!(key.expose_secret(), "sk-test");
    }

    #[test]
    fn test_openrouter_falls_back_to_secondary_variable() {
        let source = MapCredentialSource::from_iter([("VERCEL_OIDC_TOKEN", "oidc-token")]);
        let key = resolve_credential(&source, Provider::OpenRouter).unwrap();
        assert_eq!(key.expose_secret(), "oidc-token");
    }

    #[test]
    fn test_openrouter_primary_wins() {
        let source = MapCredentialSource::from_iter([
            ("OPENROUTER_API_KEY", "or-key"),
            ("VERCEL_OIDC_TOKEN", "oidc-token"),
        ]);
        let key = resolve_credential(&source, Provider::OpenRouter).unwrap();
        assert_eq!(key.expose_secret(), "or-key");
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let source = MapCredentialSource::from_iter([("OPENAI_API_KEY", "")]);
        let err = resolve_credential(&source, Provider::OpenAi).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_missing_key_is_provider_specific() {
        // An OpenAI key does not satisfy OpenRouter.
        let source = MapCredentialSource::from_iter([("OPENAI_API_KEY", "sk-test")]);
        let err = resolve_credential(&source, Provider::OpenRouter).unwrap_err();
        assert_eq!(err, AdvisoryError::missing_credential(Provider::OpenRouter));
        assert!(err.to_string().contains("OPENROUTER_API_KEY or VERCEL_OIDC_TOKEN"));
    }
}
