//! Environment variable credential source.
//!
//! Reads the process environment on every lookup; nothing is cached.

use kisan_core::credential::CredentialSource;

/// Process environment credential source used by the production handler.
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentialSource {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            // Present but not valid Unicode: unusable as a bearer token
            Err(std::env::VarError::NotUnicode(_)) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_get_existing() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("KISAN_TEST_CREDENTIAL_1", "test-value-123") };

        let source = EnvCredentialSource::new();
        assert_eq!(
            source.get("KISAN_TEST_CREDENTIAL_1"),
            Some("test-value-123".to_string())
        );

        // SAFETY: the var was just set above by this test.
        unsafe { std::env::remove_var("KISAN_TEST_CREDENTIAL_1") };
        assert!(source.get("KISAN_TEST_CREDENTIAL_1").is_none());
    }

    #[test]
    fn test_env_source_get_missing() {
        let source = EnvCredentialSource::new();
        assert!(source.get("NONEXISTENT_VAR_XYZ_123").is_none());
    }
}
