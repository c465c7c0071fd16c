//! In-process site store
//!
//! Used for local development and tests. Contents are lost on restart.

use super::layout::StorageLayout;
use super::paging::{fetch_len, split_page};
use async_trait::async_trait;
use sitewright_application::{SitePage, SiteStore, StorageError};
use sitewright_domain::{HostedSite, SiteId, SiteSummary};
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    sites: HashMap<SiteId, HostedSite>,
    index: BTreeMap<String, SiteSummary>,
}

/// Site store backed by process memory
#[derive(Default)]
pub struct InMemorySiteStore {
    layout: StorageLayout,
    inner: RwLock<Inner>,
}

impl InMemorySiteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.sites.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SiteStore for InMemorySiteStore {
    async fn put(&self, site: &HostedSite, summary: &SiteSummary) -> Result<(), StorageError> {
        let key = self.layout.index_key(summary);
        let mut inner = self.inner.write().await;
        inner.sites.insert(site.site_id.clone(), site.clone());
        inner.index.insert(key, summary.clone());
        Ok(())
    }

    async fn get(&self, id: &SiteId) -> Result<HostedSite, StorageError> {
        self.inner
            .read()
            .await
            .sites
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn list(&self, cursor: Option<&str>, limit: usize) -> Result<SitePage, StorageError> {
        let inner = self.inner.read().await;
        let start = match cursor {
            Some(c) => Bound::Excluded(c.to_string()),
            None => Bound::Unbounded,
        };

        let entries: Vec<(&String, &SiteSummary)> = inner
            .index
            .range((start, Bound::Unbounded))
            .take(fetch_len(limit))
            .collect();

        let (entries, next_cursor) = split_page(entries, limit, |(key, _)| key.as_str());

        Ok(SitePage {
            sites: entries.into_iter().map(|(_, s)| s.clone()).collect(),
            next_cursor,
        })
    }
}
