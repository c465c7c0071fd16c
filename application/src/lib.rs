//! Application layer for sitewright
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{HostingConfig, PipelineConfig, StageParams};
pub use ports::{
    image_source::{ImageSource, ImageSourceError, NoImageSource},
    llm_gateway::{CompletionRequest, GatewayError, LlmGateway},
    site_store::{SitePage, SiteStore, StorageError},
};
pub use use_cases::classify_images::{ClassificationError, ClassifyImagesUseCase};
pub use use_cases::generate_site::{GenerateSiteChangesUseCase, GenerateSiteInput, GenerationError};
pub use use_cases::handle_chat::{ChatRequest, HandleChatUseCase, OrchestrationError};
pub use use_cases::host_site::{HostingError, PublishedSite, SiteHostingService, SiteListing};
