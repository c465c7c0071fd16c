//! Handle Chat use case
//!
//! Runs one chat turn end to end, strictly in sequence:
//!
//! 1. Image decision (classifier model)
//! 2. Image lookup through the [`ImageSource`] port (no-op by default)
//! 3. Site generation (generator model)
//! 4. Merge into a [`CombinedResult`]
//!
//! A failure in step 1 or 3 aborts the turn with no partial result.

use crate::config::PipelineConfig;
use crate::ports::image_source::{ImageSource, NoImageSource};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::classify_images::{ClassificationError, ClassifyImagesUseCase};
use crate::use_cases::generate_site::{
    GenerateSiteChangesUseCase, GenerateSiteInput, GenerationError,
};
use sitewright_domain::{CombinedResult, ImageDecision, ImageRef, Message, Page, Prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a chat turn
#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Image decision failed: {0}")]
    Classification(#[from] ClassificationError),

    #[error("Site generation failed: {0}")]
    Generation(#[from] GenerationError),
}

/// Input for the HandleChat use case
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub prompt: Prompt,
    pub previous_messages: Vec<Message>,
    pub site_structure: Vec<Page>,
}

impl ChatRequest {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            previous_messages: Vec::new(),
            site_structure: Vec::new(),
        }
    }

    pub fn with_previous_messages(mut self, messages: Vec<Message>) -> Self {
        self.previous_messages = messages;
        self
    }

    pub fn with_site_structure(mut self, pages: Vec<Page>) -> Self {
        self.site_structure = pages;
        self
    }
}

/// Use case for a full chat turn
pub struct HandleChatUseCase {
    classifier: ClassifyImagesUseCase,
    generator: GenerateSiteChangesUseCase,
    images: Arc<dyn ImageSource>,
}

impl HandleChatUseCase {
    /// Build the pipeline with image lookup disabled
    pub fn new(gateway: Arc<dyn LlmGateway>, config: PipelineConfig) -> Self {
        Self {
            classifier: ClassifyImagesUseCase::new(
                gateway.clone(),
                config.classifier,
                config.history_window,
            ),
            generator: GenerateSiteChangesUseCase::new(gateway, config.generator),
            images: Arc::new(NoImageSource),
        }
    }

    /// Plug in an image source
    pub fn with_image_source(mut self, images: Arc<dyn ImageSource>) -> Self {
        self.images = images;
        self
    }

    pub async fn execute(&self, request: ChatRequest) -> Result<CombinedResult, OrchestrationError> {
        info!(
            history = request.previous_messages.len(),
            pages = request.site_structure.len(),
            "Handling chat request"
        );

        let decision = self
            .classifier
            .execute(&request.prompt, &request.previous_messages)
            .await?;

        let images = self.lookup_images(&decision).await;

        let response = self
            .generator
            .execute(GenerateSiteInput {
                prompt: &request.prompt,
                site_structure: &request.site_structure,
                prior_messages: &request.previous_messages,
                available_images: &images,
            })
            .await?;

        Ok(CombinedResult::merge(response, decision, images))
    }

    /// Image lookup is best effort: a failing source leaves the list empty.
    async fn lookup_images(&self, decision: &ImageDecision) -> Vec<ImageRef> {
        let (Some(query), Some(count)) = (decision.image_query(), decision.image_count()) else {
            return Vec::new();
        };
        if count == 0 {
            return Vec::new();
        }

        match self.images.find_images(query, count).await {
            Ok(mut images) => {
                images.truncate(usize::from(count));
                images
            }
            Err(e) => {
                warn!(query, "Image lookup failed, continuing without images: {}", e);
                Vec::new()
            }
        }
    }
}
