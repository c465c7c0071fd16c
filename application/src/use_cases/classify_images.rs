//! Classify Images use case
//!
//! First stage of a chat turn: asks the classifier model whether the request
//! needs new visual assets.

use crate::config::StageParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use sitewright_domain::{DomainError, ImageDecision, Message, Prompt, PromptTemplate};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while deciding on images
#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Unusable image decision: {0}")]
    InvalidDecision(#[from] DomainError),
}

/// Use case for the image decision stage
pub struct ClassifyImagesUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: StageParams,
    history_window: usize,
}

impl ClassifyImagesUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: StageParams, history_window: usize) -> Self {
        Self {
            gateway,
            params,
            history_window,
        }
    }

    /// Decide whether `prompt` needs images, given the conversation so far.
    ///
    /// Only the last `history_window` messages are sent. A malformed reply
    /// fails immediately; there is no retry.
    pub async fn execute(
        &self,
        prompt: &Prompt,
        history: &[Message],
    ) -> Result<ImageDecision, ClassificationError> {
        let messages = self.build_messages(prompt, history);
        debug!(
            model = %self.params.model,
            messages = messages.len(),
            "Requesting image decision"
        );

        let request = CompletionRequest::new(self.params.model.clone(), messages)
            .with_max_tokens(self.params.max_tokens)
            .with_temperature(self.params.temperature)
            .json_object();

        let value = self.gateway.complete(request).await?;
        let decision = ImageDecision::from_value(value)?;

        info!(
            needs_images = decision.needs_images(),
            image_count = decision.image_count().unwrap_or(0),
            "Image decision made"
        );
        Ok(decision)
    }

    fn build_messages(&self, prompt: &Prompt, history: &[Message]) -> Vec<Message> {
        let recent = Message::recent(history, self.history_window);
        let mut messages = Vec::with_capacity(recent.len() + 2);
        messages.push(Message::system(PromptTemplate::image_decision_system()));
        messages.extend(recent.iter().cloned());
        messages.push(Message::user(prompt.content()));
        messages
    }
}
