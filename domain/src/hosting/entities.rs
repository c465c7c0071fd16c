//! Hosted site entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::metadata::SiteMetadata;
use crate::core::error::DomainError;
use crate::site::page::Page;

/// Unique identifier for a hosted site.
///
/// Always a UUID v4 in canonical hyphenated form, which also keeps ids safe
/// to embed in storage keys and URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteId(String);

impl SiteId {
    /// Generates a fresh id; collisions are negligible without coordination.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an id received from outside (path parameter, storage key).
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s)
            .map(|u| Self(u.hyphenated().to_string()))
            .map_err(|_| DomainError::InvalidSiteId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SiteId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SiteId::parse(&s)
    }
}

impl From<SiteId> for String {
    fn from(id: SiteId) -> Self {
        id.0
    }
}

/// A published page set (Entity)
///
/// Never mutated after creation; publishing again creates a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedSite {
    pub site_id: SiteId,
    pub pages: Vec<Page>,
    pub metadata: SiteMetadata,
}

impl HostedSite {
    pub fn new(site_id: SiteId, pages: Vec<Page>, metadata: SiteMetadata) -> Self {
        Self {
            site_id,
            pages,
            metadata,
        }
    }

    /// Listing view of this site, located at `url`
    pub fn summary(&self, url: impl Into<String>) -> SiteSummary {
        SiteSummary {
            site_id: self.site_id.clone(),
            url: url.into(),
            page_count: self.pages.len(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Listing entry for a hosted site
///
/// Serializes flat: the metadata fields sit beside `siteId`, `url` and
/// `pageCount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSummary {
    pub site_id: SiteId,
    pub url: String,
    pub page_count: usize,
    #[serde(flatten)]
    pub metadata: SiteMetadata,
}
