//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: gateway model identifiers
//! - [`prompt::Prompt`]: a validated, non-blank user request
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
