//! Credential source implementations.
//!
//! - `env`: process environment (production handler)
//! - `dotenv`: `.env` files for a mode overlaid by the process environment
//!   (development shim)

pub mod dotenv;
pub mod env;
