//! Token Sync — library crate for integration testing.
//!
//! Re-exports modules needed by integration tests in `tests/`.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod reconciler;
