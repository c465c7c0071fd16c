//! Site metadata and its defaults

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::site::page::Page;

/// Default site name when neither metadata nor pages provide one
pub const DEFAULT_SITE_NAME: &str = "Untitled Site";

/// Default site description
pub const DEFAULT_DESCRIPTION: &str = "A generated website";

/// Keys owned by the server; callers cannot override them via extra metadata
const RESERVED_KEYS: &[&str] = &["createdAt", "siteId", "url", "pageCount"];

/// Metadata as supplied by a publisher; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub message_count: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Descriptive data stored with a hosted site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub name: String,
    pub description: String,
    pub topics: Vec<String>,
    pub message_count: u64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SiteMetadata {
    /// Fill in defaults for a publish request.
    ///
    /// Blank strings and empty topic lists count as absent. Additional keys
    /// the publisher supplied are kept, except the server-owned ones.
    pub fn resolve(draft: MetadataDraft, pages: &[Page], created_at: DateTime<Utc>) -> Self {
        let name = non_blank(draft.name)
            .or_else(|| pages.first().and_then(|p| non_blank(Some(p.name.clone()))))
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string());
        let description =
            non_blank(draft.description).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let topics = draft
            .topics
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| vec!["web".to_string()]);

        let mut extra = draft.extra;
        for key in RESERVED_KEYS {
            extra.remove(*key);
        }

        Self {
            name,
            description,
            topics,
            message_count: draft.message_count.unwrap_or(0),
            created_at,
            extra,
        }
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}
