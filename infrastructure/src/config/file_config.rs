//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every section is optional;
//! missing fields fall back to the defaults below.

use crate::openrouter::OpenRouterConfig;
use serde::{Deserialize, Serialize};
use sitewright_application::{HostingConfig, PipelineConfig, StageParams};
use sitewright_domain::Model;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("gateway.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("pipeline.{stage}.model cannot be empty")]
    EmptyModelName { stage: &'static str },

    #[error("pipeline.{stage}.temperature must be within 0.0..=2.0, got {value}")]
    InvalidTemperature { stage: &'static str, value: f32 },

    #[error("storage.bucket is required when storage.backend = \"s3\"")]
    MissingBucket,

    #[error("storage.page_size cannot be 0")]
    InvalidPageSize,
}

/// `[server]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL published sites are reachable under;
    /// defaults to `http://localhost:{port}`.
    pub public_base_url: Option<String>,
    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3003,
            public_base_url: None,
            cors: true,
        }
    }
}

/// `[gateway]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    pub base_url: String,
    /// Environment variable the API key is read from
    pub api_key_env: String,
    /// Inline key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    /// Sent as `X-Title`
    pub app_name: Option<String>,
    /// Sent as `HTTP-Referer`
    pub referer: Option<String>,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: 120,
            app_name: Some("sitewright".to_string()),
            referer: None,
        }
    }
}

/// `[pipeline.classifier]` / `[pipeline.generator]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStageConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl From<StageParams> for FileStageConfig {
    fn from(params: StageParams) -> Self {
        Self {
            model: params.model.to_string(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }
}

impl Default for FileStageConfig {
    fn default() -> Self {
        StageParams::generator().into()
    }
}

impl FileStageConfig {
    fn to_params(&self) -> StageParams {
        StageParams::new(
            Model::from(self.model.trim()),
            self.max_tokens,
            self.temperature,
        )
    }

    fn validate(&self, stage: &'static str) -> Result<(), ConfigValidationError> {
        if self.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName { stage });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigValidationError::InvalidTemperature {
                stage,
                value: self.temperature,
            });
        }
        Ok(())
    }
}

/// `[pipeline]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    pub classifier: FileStageConfig,
    pub generator: FileStageConfig,
    pub history_window: usize,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            classifier: StageParams::classifier().into(),
            generator: StageParams::generator().into(),
            history_window: 5,
        }
    }
}

/// Where hosted sites are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    #[default]
    Memory,
}

/// `[storage]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: StorageBackend,
    pub bucket: Option<String>,
    pub region: String,
    pub profile: Option<String>,
    /// Key prefix inside the bucket
    pub prefix: String,
    pub page_size: usize,
    pub recent_count: usize,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            bucket: None,
            region: "us-east-1".to_string(),
            profile: None,
            prefix: String::new(),
            page_size: 12,
            recent_count: 10,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub gateway: FileGatewayConfig,
    pub pipeline: FilePipelineConfig,
    pub storage: FileStorageConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }
        if self.gateway.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        self.pipeline.classifier.validate("classifier")?;
        self.pipeline.generator.validate("generator")?;

        if self.storage.backend == StorageBackend::S3
            && self.storage.bucket.as_deref().is_none_or(|b| b.trim().is_empty())
        {
            return Err(ConfigValidationError::MissingBucket);
        }
        if self.storage.page_size == 0 {
            return Err(ConfigValidationError::InvalidPageSize);
        }

        Ok(())
    }

    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_classifier(self.pipeline.classifier.to_params())
            .with_generator(self.pipeline.generator.to_params())
            .with_history_window(self.pipeline.history_window)
    }

    pub fn public_base_url(&self) -> String {
        self.server
            .public_base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.server.port))
    }

    pub fn to_hosting_config(&self) -> HostingConfig {
        HostingConfig::default()
            .with_public_base_url(self.public_base_url())
            .with_page_size(self.storage.page_size)
            .with_recent_count(self.storage.recent_count)
    }

    /// Gateway settings; the API key is resolved from `api_key`, then from
    /// the `api_key_env` variable.
    pub fn to_openrouter_config(&self) -> OpenRouterConfig {
        let api_key = self
            .gateway
            .api_key
            .clone()
            .or_else(|| std::env::var(&self.gateway.api_key_env).ok())
            .filter(|k| !k.trim().is_empty());

        OpenRouterConfig {
            base_url: self.gateway.base_url.clone(),
            api_key,
            timeout: Duration::from_secs(self.gateway.timeout_seconds),
            app_name: self.gateway.app_name.clone(),
            referer: self.gateway.referer.clone(),
        }
    }

    #[cfg(feature = "s3")]
    pub fn to_s3_config(&self) -> Option<crate::storage::S3StoreConfig> {
        let bucket = self.storage.bucket.clone()?;
        Some(crate::storage::S3StoreConfig {
            bucket,
            region: self.storage.region.clone(),
            profile: self.storage.profile.clone(),
            prefix: self.storage.prefix.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3003);
        assert!(config.server.cors);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.public_base_url(), "http://localhost:3003");
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 8080
public_base_url = "https://sites.example.com"
cors = false

[gateway]
api_key_env = "MY_KEY"
timeout_seconds = 30

[pipeline]
history_window = 3

[pipeline.classifier]
model = "openai/gpt-4o-mini"
max_tokens = 500
temperature = 0.2

[pipeline.generator]
model = "some-vendor/custom-model"

[storage]
backend = "s3"
bucket = "my-sites"
region = "eu-west-1"
prefix = "prod"
page_size = 20
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.server.cors);
        assert_eq!(config.storage.backend, StorageBackend::S3);
        assert_eq!(config.storage.recent_count, 10);

        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.classifier.model, Model::Gpt4oMini);
        assert_eq!(pipeline.classifier.max_tokens, 500);
        assert_eq!(
            pipeline.generator.model,
            Model::Custom("some-vendor/custom-model".to_string())
        );
        assert_eq!(pipeline.history_window, 3);

        let hosting = config.to_hosting_config();
        assert_eq!(hosting.public_base_url, "https://sites.example.com");
        assert_eq!(hosting.page_size, 20);
    }

    #[test]
    fn test_partial_pipeline_keeps_stage_defaults() {
        let config: FileConfig = toml::from_str("[pipeline]\nhistory_window = 2\n").unwrap();
        let pipeline = config.to_pipeline_config();
        assert_eq!(pipeline.classifier, StageParams::classifier());
        assert_eq!(pipeline.generator, StageParams::generator());
    }

    #[test]
    fn test_validate_zero_port() {
        let config: FileConfig = toml::from_str("[server]\nport = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidPort));
    }

    #[test]
    fn test_validate_empty_model() {
        let config: FileConfig =
            toml::from_str("[pipeline.classifier]\nmodel = \"  \"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyModelName {
                stage: "classifier"
            })
        );
    }

    #[test]
    fn test_validate_temperature_range() {
        let config: FileConfig =
            toml::from_str("[pipeline.generator]\ntemperature = 2.5\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature {
                stage: "generator",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_s3_requires_bucket() {
        let config: FileConfig = toml::from_str("[storage]\nbackend = \"s3\"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::MissingBucket));
    }

    #[test]
    fn test_inline_api_key_wins() {
        let mut config = FileConfig::default();
        config.gateway.api_key = Some("sk-inline".to_string());
        config.gateway.api_key_env = "SITEWRIGHT_TEST_UNSET_VARIABLE".to_string();
        config.gateway.timeout_seconds = 7;

        let gateway = config.to_openrouter_config();
        assert_eq!(gateway.api_key.as_deref(), Some("sk-inline"));
        assert_eq!(gateway.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_missing_api_key_is_none() {
        let mut config = FileConfig::default();
        config.gateway.api_key_env = "SITEWRIGHT_TEST_UNSET_VARIABLE".to_string();
        assert!(config.to_openrouter_config().api_key.is_none());
    }
}
