//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Invalid image decision: {0}")]
    InvalidDecision(String),

    #[error("Invalid generator response: {0}")]
    InvalidResponse(String),

    #[error("Invalid site id: {0}")]
    InvalidSiteId(String),
}
