//! Infrastructure layer for sitewright
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod openrouter;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGatewayConfig, FilePipelineConfig,
    FileServerConfig, FileStageConfig, FileStorageConfig, StorageBackend,
};
pub use openrouter::{OpenRouterConfig, OpenRouterGateway};
pub use storage::{InMemorySiteStore, StorageLayout};

#[cfg(feature = "s3")]
pub use storage::{S3SiteStore, S3StoreConfig};
