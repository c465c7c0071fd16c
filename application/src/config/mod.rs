//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`PipelineConfig`]: model and sampling parameters for each chat stage
//! - [`HostingConfig`]: public locators and listing sizes for hosted sites

pub mod hosting_config;
pub mod pipeline_config;

pub use hosting_config::HostingConfig;
pub use pipeline_config::{PipelineConfig, StageParams};
