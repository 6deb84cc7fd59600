//! Shared building blocks for the workspace binaries and crates:
//! tracing initialisation, small response types and startup checks.

pub mod types;
pub mod utils;
pub mod env;
