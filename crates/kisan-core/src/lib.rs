//! Advisory request handling and upstream trait definitions for Kisan.
//!
//! This crate defines the "ports" the infrastructure layer implements
//! (`ChatTransport`, `CredentialSource`) and the single pure advisory
//! handler both hosting adapters delegate to. It depends only on
//! `kisan-types` -- never on `kisan-infra` or any HTTP crate.

pub mod advisory;
pub mod credential;
pub mod llm;
pub mod prediction;
