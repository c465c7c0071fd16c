//! Domain layer for sitewright
//!
//! This crate contains the core entities and value objects of the site
//! builder. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat pipeline
//!
//! A chat turn runs two model calls in sequence:
//!
//! - **Image decision**: does the request need new visual assets? ([`ImageDecision`])
//! - **Site generation**: what should change in the page set? ([`GeneratorResponse`])
//!
//! Both are merged into a single [`CombinedResult`] for the caller.
//!
//! ## Hosting
//!
//! A finished page set is published as an immutable [`HostedSite`] under a
//! freshly generated [`SiteId`].

pub mod conversation;
pub mod core;
pub mod generation;
pub mod hosting;
pub mod prompt;
pub mod site;

// Re-export commonly used types
pub use conversation::{Message, Role};
pub use crate::core::{error::DomainError, model::Model, prompt::Prompt};
pub use generation::{
    decision::{ImageDecision, MAX_IMAGE_COUNT},
    response::{CombinedResult, GeneratorResponse, ImageRef},
};
pub use hosting::{HostedSite, MetadataDraft, SiteId, SiteMetadata, SiteSummary};
pub use prompt::PromptTemplate;
pub use site::{
    change::{ChangeAction, SiteChange},
    page::{Page, apply_changes},
};
