//! Site hosting use cases
//!
//! Publishing, listing and fetching hosted sites on top of the
//! [`SiteStore`] port.

use crate::config::HostingConfig;
use crate::ports::site_store::{SiteStore, StorageError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sitewright_domain::{HostedSite, MetadataDraft, Page, SiteId, SiteMetadata, SiteSummary};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from hosting operations
#[derive(Error, Debug)]
pub enum HostingError {
    #[error("Site not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for HostingError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound(id) => HostingError::NotFound(id),
            other => HostingError::Storage(other),
        }
    }
}

/// Result of a publish
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedSite {
    pub site_id: SiteId,
    pub url: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the site listing, in the shape the API returns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteListing {
    pub sites: Vec<SiteSummary>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_start_after: Option<String>,
}

/// Service for hosting published page sets
pub struct SiteHostingService {
    store: Arc<dyn SiteStore>,
    config: HostingConfig,
}

impl SiteHostingService {
    pub fn new(store: Arc<dyn SiteStore>, config: HostingConfig) -> Self {
        Self { store, config }
    }

    /// Store `pages` under a fresh id.
    ///
    /// Identical content published twice yields two distinct sites.
    pub async fn publish(
        &self,
        pages: Vec<Page>,
        metadata: MetadataDraft,
    ) -> Result<PublishedSite, HostingError> {
        let site_id = SiteId::generate();
        let metadata = SiteMetadata::resolve(metadata, &pages, Utc::now());
        let site = HostedSite::new(site_id.clone(), pages, metadata);
        let url = self.config.site_url(&site_id);
        let summary = site.summary(url.clone());

        self.store.put(&site, &summary).await?;

        info!(
            site_id = %site_id,
            pages = site.pages.len(),
            name = %site.metadata.name,
            "Site published"
        );
        Ok(PublishedSite {
            site_id,
            url,
            name: site.metadata.name,
            created_at: site.metadata.created_at,
        })
    }

    /// One page of sites, newest first
    pub async fn list(&self, start_after: Option<&str>) -> Result<SiteListing, HostingError> {
        let page = self.store.list(start_after, self.config.page_size).await?;
        debug!(count = page.sites.len(), has_more = page.next_cursor.is_some(), "Listed sites");
        Ok(SiteListing {
            sites: page.sites,
            has_more: page.next_cursor.is_some(),
            next_start_after: page.next_cursor,
        })
    }

    /// The most recent sites, without pagination
    pub async fn list_recent(&self) -> Result<Vec<SiteSummary>, HostingError> {
        let page = self.store.list(None, self.config.recent_count).await?;
        Ok(page.sites)
    }

    /// Fetch a site by its id as received from a caller
    pub async fn get(&self, site_id: &str) -> Result<HostedSite, HostingError> {
        let id = SiteId::parse(site_id).map_err(|_| HostingError::NotFound(site_id.to_string()))?;
        Ok(self.store.get(&id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::site_store::SitePage;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Store keeping sites in publish order; the cursor is a site id.
    #[derive(Default)]
    struct VecStore {
        sites: Mutex<Vec<(HostedSite, SiteSummary)>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl SiteStore for VecStore {
        async fn put(&self, site: &HostedSite, summary: &SiteSummary) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Io("disk full".to_string()));
            }
            self.sites.lock().unwrap().push((site.clone(), summary.clone()));
            Ok(())
        }

        async fn get(&self, id: &SiteId) -> Result<HostedSite, StorageError> {
            self.sites
                .lock()
                .unwrap()
                .iter()
                .find(|(s, _)| &s.site_id == id)
                .map(|(s, _)| s.clone())
                .ok_or_else(|| StorageError::NotFound(id.to_string()))
        }

        async fn list(&self, cursor: Option<&str>, limit: usize) -> Result<SitePage, StorageError> {
            let sites = self.sites.lock().unwrap();
            let newest_first: Vec<SiteSummary> =
                sites.iter().rev().map(|(_, summary)| summary.clone()).collect();
            let start = match cursor {
                Some(c) => newest_first
                    .iter()
                    .position(|s| s.site_id.as_str() == c)
                    .map_or(newest_first.len(), |i| i + 1),
                None => 0,
            };
            let rest = &newest_first[start..];
            let page: Vec<SiteSummary> = rest.iter().take(limit).cloned().collect();
            let next_cursor = (rest.len() > limit)
                .then(|| page.last().map(|s| s.site_id.to_string()))
                .flatten();
            Ok(SitePage {
                sites: page,
                next_cursor,
            })
        }
    }

    fn service(store: Arc<VecStore>, page_size: usize) -> SiteHostingService {
        SiteHostingService::new(
            store,
            HostingConfig::default()
                .with_public_base_url("https://sites.example.com")
                .with_page_size(page_size)
                .with_recent_count(2),
        )
    }

    fn pages() -> Vec<Page> {
        vec![Page::new("Home", "/index.html", "<h1>Hi</h1>")]
    }

    #[tokio::test]
    async fn test_publish_then_get_returns_same_content() {
        let store = Arc::new(VecStore::default());
        let service = service(store, 10);
        let draft: MetadataDraft =
            serde_json::from_value(json!({"name": "Cafe", "topics": ["food"]})).unwrap();

        let published = service.publish(pages(), draft).await.unwrap();
        assert_eq!(
            published.url,
            format!("https://sites.example.com/sites/{}", published.site_id)
        );
        assert_eq!(published.name, "Cafe");

        let site = service.get(published.site_id.as_str()).await.unwrap();
        assert_eq!(site.pages, pages());
        assert_eq!(site.metadata.topics, vec!["food".to_string()]);
        assert_eq!(site.metadata.created_at, published.created_at);
    }

    #[tokio::test]
    async fn test_identical_publishes_get_distinct_ids() {
        let store = Arc::new(VecStore::default());
        let service = service(store, 10);

        let a = service.publish(pages(), MetadataDraft::default()).await.unwrap();
        let b = service.publish(pages(), MetadataDraft::default()).await.unwrap();
        assert_ne!(a.site_id, b.site_id);
        assert_eq!(service.get(a.site_id.as_str()).await.unwrap().pages, pages());
        assert_eq!(service.get(b.site_id.as_str()).await.unwrap().pages, pages());
    }

    #[tokio::test]
    async fn test_get_unknown_or_malformed_id_is_not_found() {
        let service = service(Arc::new(VecStore::default()), 10);

        let unknown = SiteId::generate();
        assert!(matches!(
            service.get(unknown.as_str()).await,
            Err(HostingError::NotFound(_))
        ));
        assert!(matches!(
            service.get("not-a-site").await,
            Err(HostingError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let store = Arc::new(VecStore {
            fail_writes: true,
            ..Default::default()
        });
        let err = service(store, 10)
            .publish(pages(), MetadataDraft::default())
            .await
            .unwrap_err();
        assert!(matches!(err, HostingError::Storage(StorageError::Io(_))));
    }

    #[tokio::test]
    async fn test_listing_pages_and_recent() {
        let store = Arc::new(VecStore::default());
        let service = service(store, 2);
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(service.publish(pages(), MetadataDraft::default()).await.unwrap().site_id);
        }

        let first = service.list(None).await.unwrap();
        assert!(first.has_more);
        assert_eq!(first.sites.len(), 2);
        assert_eq!(first.sites[0].site_id, ids[2]);

        let second = service
            .list(first.next_start_after.as_deref())
            .await
            .unwrap();
        assert!(!second.has_more);
        assert_eq!(second.next_start_after, None);
        assert_eq!(second.sites.len(), 1);
        assert_eq!(second.sites[0].site_id, ids[0]);

        let wire = serde_json::to_value(&second).unwrap();
        assert_eq!(wire["hasMore"], false);
        assert!(wire.get("nextStartAfter").is_none());

        let recent = service.list_recent().await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].site_id, ids[2]);
    }
}
