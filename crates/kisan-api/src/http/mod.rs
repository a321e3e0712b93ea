//! HTTP layer for Kisan.
//!
//! Two axum hosting adapters around the same advisory handler:
//! `router` for production and `dev` for the development shim.

pub mod dev;
pub mod handlers;
pub mod response;
pub mod router;

/// Path the advisory proxy is mounted on.
pub const LLM_PATH: &str = "/api/llm";

#[cfg(test)]
pub(crate) mod test_support;
