//! Pipeline parameters for each model call.
//!
//! [`PipelineConfig`] groups the static parameters of the two model calls
//! made by [`HandleChatUseCase`](crate::use_cases::handle_chat::HandleChatUseCase).

use serde::{Deserialize, Serialize};
use sitewright_domain::Model;

/// Model and sampling parameters for one gateway call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageParams {
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl StageParams {
    pub fn new(model: Model, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model,
            max_tokens,
            temperature,
        }
    }

    /// Image decision defaults
    pub fn classifier() -> Self {
        Self::new(Model::default_classifier(), 10_000, 0.7)
    }

    /// Site generation defaults
    pub fn generator() -> Self {
        Self::new(Model::default_generator(), 8192, 1.0)
    }
}

/// Chat pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Parameters for the image decision call.
    pub classifier: StageParams,
    /// Parameters for the site generation call.
    pub generator: StageParams,
    /// How many trailing history messages the image decision sees.
    pub history_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            classifier: StageParams::classifier(),
            generator: StageParams::generator(),
            history_window: 5,
        }
    }
}

impl PipelineConfig {
    pub fn with_classifier(mut self, params: StageParams) -> Self {
        self.classifier = params;
        self
    }

    pub fn with_generator(mut self, params: StageParams) -> Self {
        self.generator = params;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.classifier.model, Model::Gpt4o);
        assert_eq!(config.classifier.max_tokens, 10_000);
        assert_eq!(config.generator.model, Model::Claude35Sonnet);
        assert_eq!(config.generator.max_tokens, 8192);
        assert!((config.generator.temperature - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.history_window, 5);
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_history_window(2)
            .with_generator(StageParams::new(Model::Gpt4oMini, 1000, 0.2));
        assert_eq!(config.history_window, 2);
        assert_eq!(config.generator.model, Model::Gpt4oMini);
    }
}
