//! Upstream LLM abstraction.

pub mod transport;
