//! Configuration file loading for sitewright
//!
//! Sources are merged in this order, later ones winning:
//!
//! 1. Default values
//! 2. Global: `$XDG_CONFIG_HOME/sitewright/config.toml`
//! 3. Project root: `./sitewright.toml` or `./.sitewright.toml`
//! 4. `--config <path>` specified file
//! 5. Environment variables

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGatewayConfig, FilePipelineConfig, FileServerConfig,
    FileStageConfig, FileStorageConfig, StorageBackend,
};
pub use loader::ConfigLoader;
