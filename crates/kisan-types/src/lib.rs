//! Shared domain types for Kisan.
//!
//! This crate contains the types used across the advisory proxy: advisory
//! requests and replies, provider identities, chat-completion wire shapes,
//! configuration, yield-prediction records, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod advisory;
pub mod config;
pub mod error;
pub mod llm;
pub mod prediction;
