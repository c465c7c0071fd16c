//! LLM Gateway port
//!
//! Defines the interface for calling the remote chat-completion service.

use async_trait::async_trait;
use sitewright_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Model returned no content")]
    EmptyResponse,
}

impl GatewayError {
    /// Upstream HTTP status, when the gateway answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single chat-completion call
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: Model,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Ask for (and parse) a JSON object as the whole reply
    pub require_json_object: bool,
}

impl CompletionRequest {
    pub fn new(model: Model, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            max_tokens: 4096,
            temperature: 1.0,
            require_json_object: false,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn json_object(mut self) -> Self {
        self.require_json_object = true;
        self
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer reaches the chat-completion
/// service. Implementations (adapters) live in the infrastructure layer.
/// Every call is one fresh round trip: no retries and no caching.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one completion request.
    ///
    /// With `require_json_object` the reply content is parsed and returned as
    /// a JSON value; otherwise it is returned as a JSON string.
    async fn complete(&self, request: CompletionRequest) -> Result<serde_json::Value, GatewayError>;
}
