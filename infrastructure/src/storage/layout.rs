//! Object key layout for hosted sites

use sitewright_domain::{SiteId, SiteSummary};

/// Largest timestamp (ms) the index can order; far beyond any real clock.
const ORDER_CEILING_MILLIS: i64 = 9_999_999_999_999;

/// Key scheme shared by every site store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageLayout {
    prefix: String,
}

impl StorageLayout {
    /// `prefix` scopes all keys, e.g. `"prod/"`; a trailing slash is added
    /// when missing.
    pub fn new(prefix: impl Into<String>) -> Self {
        let mut prefix: String = prefix.into().trim_start_matches('/').to_string();
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self { prefix }
    }

    pub fn site_key(&self, id: &SiteId) -> String {
        format!("{}sites/{}/site.json", self.prefix, id)
    }

    pub fn index_prefix(&self) -> String {
        format!("{}index/", self.prefix)
    }

    /// Index key for a summary; newer sites sort first.
    pub fn index_key(&self, summary: &SiteSummary) -> String {
        let millis = summary
            .metadata
            .created_at
            .timestamp_millis()
            .clamp(0, ORDER_CEILING_MILLIS);
        format!(
            "{}{:013}-{}.json",
            self.index_prefix(),
            ORDER_CEILING_MILLIS - millis,
            summary.site_id
        )
    }
}
