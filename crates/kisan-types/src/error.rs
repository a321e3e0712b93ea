use thiserror::Error;

use crate::advisory::Provider;

/// Failures surfaced to advisory callers as `{error}` envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisoryError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid prompt. Please provide a valid prompt string.")]
    InvalidPrompt,

    #[error("Server: Missing API key. Set {} in your environment variables.", .vars.join(" or "))]
    MissingCredential {
        provider: Provider,
        vars: Vec<&'static str>,
    },

    /// Raw error text from a non-2xx upstream response.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Unexpected(String),
}

impl AdvisoryError {
    pub fn missing_credential(provider: Provider) -> Self {
        AdvisoryError::MissingCredential {
            provider,
            vars: provider.credential_vars().to_vec(),
        }
    }

    /// Wrap a failure message, substituting a generic one when it is empty.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            AdvisoryError::Unexpected("Unknown error".to_string())
        } else {
            AdvisoryError::Unexpected(message)
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AdvisoryError::MethodNotAllowed => 405,
            AdvisoryError::InvalidPrompt => 400,
            AdvisoryError::MissingCredential { .. }
            | AdvisoryError::Upstream(_)
            | AdvisoryError::Unexpected(_) => 500,
        }
    }
}

/// Errors from a single upstream chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Deserialization(String),
}

impl From<LlmError> for AdvisoryError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Upstream { body, .. } if body.is_empty() => {
                AdvisoryError::Upstream("Upstream error".to_string())
            }
            LlmError::Upstream { body, .. } => AdvisoryError::Upstream(body),
            LlmError::Transport(msg) | LlmError::Deserialization(msg) => {
                AdvisoryError::unexpected(msg)
            }
        }
    }
}

/// Errors loading configuration or the development environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors building a yield prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("missing farm parameter: {0}")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("unknown state or union territory: '{0}'")]
    UnknownState(String),

    #[error("Invalid JSON from model")]
    InvalidJson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_variables() {
        let err = AdvisoryError::missing_credential(Provider::OpenAi);
        assert_eq!(
            err.to_string(),
            "Server: Missing API key. Set OPENAI_API_KEY in your environment variables."
        );

        let err = AdvisoryError::missing_credential(Provider::OpenRouter);
        assert_eq!(
            err.to_string(),
            "Server: Missing API key. Set OPENROUTER_API_KEY or VERCEL_OIDC_TOKEN in your environment variables."
        );
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_upstream_body_relayed_verbatim() {
        let err: AdvisoryError = LlmError::Upstream {
            status: 429,
            body: "rate limited".to_string(),
        }
        .into();
        assert_eq!(err, AdvisoryError::Upstream("rate limited".to_string()));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_empty_upstream_body_gets_placeholder() {
        let err: AdvisoryError = LlmError::Upstream {
            status: 502,
            body: String::new(),
        }
        .into();
        assert_eq!(err.to_string(), "Upstream error");
    }

    #[test]
    fn test_unexpected_without_message() {
        assert_eq!(AdvisoryError::unexpected("").to_string(), "Unknown error");
        let err: AdvisoryError = LlmError::Transport("connection refused".into()).into();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.status_code(), 500);
    }
}
