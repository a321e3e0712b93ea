//! Infrastructure layer for Kisan.
//!
//! Contains implementations of the traits defined in `kisan-core`: the
//! reqwest-backed OpenAI-compatible transport, credential sources backed by
//! the process environment and by `.env` files, and the `kisan.toml` loader.

pub mod config;
pub mod credential;
pub mod llm;
