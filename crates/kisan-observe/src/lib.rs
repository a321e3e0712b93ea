//! Observability for Kisan: tracing subscriber setup and GenAI span
//! conventions shared by the advisory path.

pub mod genai_attrs;
pub mod tracing_setup;
