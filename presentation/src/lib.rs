//! Presentation layer for sitewright
//!
//! This crate contains the HTTP API (router, handlers, error mapping)
//! and the CLI definitions for the server binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::{Cli, LogFormat};
pub use http::{ApiError, AppState, router};
