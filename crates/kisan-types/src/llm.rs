//! Chat-completion wire types for OpenAI-compatible upstreams.

use std::fmt;

use serde::{Deserialize, Serialize};

/// System instruction fixing the assistant's domain and tone.
pub const ADVISORY_SYSTEM_PROMPT: &str =
    "You are an AI assistant for agriculture. Always reply in concise JSON if asked.";

/// Sampling temperature for every advisory call.
pub const ADVISORY_TEMPERATURE: f64 = 0.3;

/// Role of a message in a chat-completion conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Body POSTed to `{base_url}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
}

impl ChatCompletionRequest {
    /// The fixed two-message advisory conversation.
    pub fn advisory(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::system(ADVISORY_SYSTEM_PROMPT), Message::user(prompt)],
            temperature: ADVISORY_TEMPERATURE,
        }
    }
}

/// The parts of an upstream completion the proxy relays or logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatCompletionResponse {
    pub content: String,
    pub model: Option<String>,
    pub id: Option<String>,
}

impl ChatCompletionResponse {
    /// Extract fields from an upstream JSON body.
    ///
    /// Shape mismatches never fail: a missing or non-string
    /// `choices[0].message.content` becomes an empty string.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let content = value
            .pointer("/choices/0/message/content")
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string();

        Self {
            content,
            model: value.get("model").and_then(|m| m.as_str()).map(String::from),
            id: value.get("id").and_then(|i| i.as_str()).map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_advisory_request_shape() {
        let req = ChatCompletionRequest::advisory("gpt-4o-mini", "Best time to sow wheat?");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], ADVISORY_SYSTEM_PROMPT);
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "Best time to sow wheat?");
        assert_eq!(value["temperature"], json!(0.3));
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_response_extracts_first_choice() {
        let body = json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini",
            "choices": [
                {"message": {"role": "assistant", "content": "X"}},
                {"message": {"role": "assistant", "content": "Y"}}
            ]
        });
        let resp = ChatCompletionResponse::from_value(&body);
        assert_eq!(resp.content, "X");
        assert_eq!(resp.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(resp.id.as_deref(), Some("chatcmpl-1"));
    }

    #[test]
    fn test_malformed_response_yields_empty_content() {
        for body in [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"message": {}}]}),
            json!({"choices": [{"message": {"content": null}}]}),
            json!({"choices": [{"message": {"content": 42}}]}),
            json!([1, 2, 3]),
        ] {
            assert_eq!(ChatCompletionResponse::from_value(&body).content, "");
        }
    }
}
