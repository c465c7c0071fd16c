//! S3-backed site store
//!
//! Each publish writes two objects: the full site and a small summary under
//! the index prefix. Listing scans the index with `start_after` and then
//! fetches the summaries it needs.

use super::layout::StorageLayout;
use super::paging::{max_keys, split_page};
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use serde::de::DeserializeOwned;
use sitewright_application::{SitePage, SiteStore, StorageError};
use sitewright_domain::{HostedSite, SiteId, SiteSummary};
use tracing::{debug, info};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Connection settings for [`S3SiteStore`]
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: String,
    /// Named AWS profile; `None` uses the default credential chain.
    pub profile: Option<String>,
    pub prefix: String,
}

pub struct S3SiteStore {
    client: S3Client,
    bucket: String,
    layout: StorageLayout,
}

impl S3SiteStore {
    /// Resolve AWS credentials and create the client.
    pub async fn new(config: &S3StoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(ref profile) = config.profile {
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;
        info!(bucket = %config.bucket, region = %config.region, "S3 site store initialized");

        Self::from_client(S3Client::new(&sdk_config), config)
    }

    pub fn from_client(client: S3Client, config: &S3StoreConfig) -> Self {
        Self {
            client,
            bucket: config.bucket.clone(),
            layout: StorageLayout::new(config.prefix.clone()),
        }
    }

    async fn put_json(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(JSON_CONTENT_TYPE)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StorageError::Io(format!("put {}: {}", key, DisplayErrorContext(&e))))?;
        Ok(())
    }

    /// Returns `Ok(None)` when the key does not exist.
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                if e.as_service_error().is_some_and(|se| se.is_no_such_key()) {
                    return Ok(None);
                }
                return Err(StorageError::Io(format!(
                    "get {}: {}",
                    key,
                    DisplayErrorContext(&e)
                )));
            }
        };

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Io(format!("read {}: {}", key, e)))?
            .into_bytes();

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

#[async_trait]
impl SiteStore for S3SiteStore {
    async fn put(&self, site: &HostedSite, summary: &SiteSummary) -> Result<(), StorageError> {
        let site_key = self.layout.site_key(&site.site_id);
        let index_key = self.layout.index_key(summary);

        // Site first so the index never points at a missing object.
        self.put_json(&site_key, serde_json::to_vec(site)?).await?;
        self.put_json(&index_key, serde_json::to_vec(summary)?).await?;

        debug!(site_id = %site.site_id, "Stored site");
        Ok(())
    }

    async fn get(&self, id: &SiteId) -> Result<HostedSite, StorageError> {
        self.get_json(&self.layout.site_key(id))
            .await?
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn list(&self, cursor: Option<&str>, limit: usize) -> Result<SitePage, StorageError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(self.layout.index_prefix())
            .set_start_after(cursor.map(str::to_string))
            .max_keys(max_keys(limit))
            .send()
            .await
            .map_err(|e| StorageError::Io(format!("list: {}", DisplayErrorContext(&e))))?;

        let keys: Vec<String> = output
            .contents()
            .iter()
            .filter_map(|obj| obj.key().map(str::to_string))
            .collect();

        let (keys, next_cursor) = split_page(keys, limit, |key| key.as_str());

        let mut sites = Vec::with_capacity(keys.len());
        for key in &keys {
            // An index entry may outlive a manual cleanup; skip rather than fail.
            if let Some(summary) = self.get_json::<SiteSummary>(key).await? {
                sites.push(summary);
            }
        }

        Ok(SitePage { sites, next_cursor })
    }
}
