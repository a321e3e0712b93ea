//! LLM transport implementations.

pub mod openai_compat;
