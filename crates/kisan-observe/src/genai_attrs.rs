//! OpenTelemetry GenAI Semantic Convention values.
//!
//! Upstream-call spans carry `gen_ai.*` fields named after the OTel GenAI
//! Semantic Conventions. Field names are written inline in the span macros;
//! the values shared across crates live here.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"chat gpt-4o-mini"`)

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

/// Yield prediction built on top of a chat completion.
pub const OP_PREDICT_YIELD: &str = "predict_yield";

/// Span name for an operation against a model.
pub fn span_name(operation: &str, model: &str) -> String {
    format!("{operation} {model}")
}
