//! Request handlers shared by both routers.

pub mod advisory;
pub mod health;
