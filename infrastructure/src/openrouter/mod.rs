//! OpenRouter chat-completion gateway
//!
//! Implements the [`LlmGateway`](sitewright_application::LlmGateway) port over
//! the OpenAI-compatible `/chat/completions` endpoint.

mod gateway;
mod protocol;

pub use gateway::{OpenRouterConfig, OpenRouterGateway};
