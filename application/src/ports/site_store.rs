//! Site store port
//!
//! Persistence for hosted sites. Adapters decide the physical layout; the
//! listing cursor they hand out is opaque to everyone else.

use async_trait::async_trait;
use sitewright_domain::{HostedSite, SiteId, SiteSummary};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Site not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Stored data could not be (de)serialized: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// One page of a site listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SitePage {
    /// Summaries, newest first
    pub sites: Vec<SiteSummary>,
    /// Cursor to pass back for the next page; `None` on the last page
    pub next_cursor: Option<String>,
}

#[async_trait]
pub trait SiteStore: Send + Sync {
    /// Persist a new site and its listing entry.
    async fn put(&self, site: &HostedSite, summary: &SiteSummary) -> Result<(), StorageError>;

    /// Fetch a site by id; [`StorageError::NotFound`] if unknown.
    async fn get(&self, id: &SiteId) -> Result<HostedSite, StorageError>;

    /// List up to `limit` sites, newest first, resuming after `cursor`.
    async fn list(&self, cursor: Option<&str>, limit: usize) -> Result<SitePage, StorageError>;
}
