//! Hosting parameters.

use serde::{Deserialize, Serialize};
use sitewright_domain::SiteId;

/// Controls how hosted sites are located and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingConfig {
    /// Base URL that published sites are served under.
    pub public_base_url: String,
    /// Sites per page for cursor-based listing.
    pub page_size: usize,
    /// Sites returned by the recent listing.
    pub recent_count: usize,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3003".to_string(),
            page_size: 12,
            recent_count: 10,
        }
    }
}

impl HostingConfig {
    pub fn with_public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = url.into();
        self
    }

    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    pub fn with_recent_count(mut self, count: usize) -> Self {
        self.recent_count = count;
        self
    }

    /// Public locator for a hosted site
    pub fn site_url(&self, id: &SiteId) -> String {
        format!("{}/sites/{}", self.public_base_url.trim_end_matches('/'), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_joins_cleanly() {
        let id = SiteId::generate();
        let with_slash = HostingConfig::default().with_public_base_url("https://sites.example.com/");
        let without = HostingConfig::default().with_public_base_url("https://sites.example.com");

        let expected = format!("https://sites.example.com/sites/{}", id);
        assert_eq!(with_slash.site_url(&id), expected);
        assert_eq!(without.site_url(&id), expected);
    }
}
