//! Generate Site Changes use case
//!
//! Second stage of a chat turn: asks the generator model for page mutations.

use crate::config::StageParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use sitewright_domain::{
    DomainError, GeneratorResponse, ImageRef, Message, Page, Prompt, PromptTemplate,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating site changes
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Unusable generator response: {0}")]
    InvalidResponse(#[from] DomainError),
}

/// Input for the GenerateSiteChanges use case
#[derive(Debug, Clone)]
pub struct GenerateSiteInput<'a> {
    pub prompt: &'a Prompt,
    pub site_structure: &'a [Page],
    pub prior_messages: &'a [Message],
    pub available_images: &'a [ImageRef],
}

/// Use case for the site generation stage
pub struct GenerateSiteChangesUseCase {
    gateway: Arc<dyn LlmGateway>,
    params: StageParams,
}

impl GenerateSiteChangesUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: StageParams) -> Self {
        Self { gateway, params }
    }

    pub async fn execute(
        &self,
        input: GenerateSiteInput<'_>,
    ) -> Result<GeneratorResponse, GenerationError> {
        let system = PromptTemplate::site_generation_system(
            input.site_structure,
            input.prior_messages,
            input.available_images,
        );
        debug!(
            model = %self.params.model,
            pages = input.site_structure.len(),
            images = input.available_images.len(),
            "Requesting site changes"
        );

        let request = CompletionRequest::new(
            self.params.model.clone(),
            vec![Message::system(system), Message::user(input.prompt.content())],
        )
        .with_max_tokens(self.params.max_tokens)
        .with_temperature(self.params.temperature)
        .json_object();

        let value = self.gateway.complete(request).await?;
        let response = GeneratorResponse::from_value(value)?;

        info!(changes = response.changes.len(), "Site changes generated");
        Ok(response)
    }
}
