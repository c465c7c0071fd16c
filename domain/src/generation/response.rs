//! Generator response and the combined chat result

use serde::{Deserialize, Serialize};

use super::decision::ImageDecision;
use crate::core::error::DomainError;
use crate::site::change::SiteChange;

/// An image the generator may reference in static content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// What the site generator proposes for a prompt (Value Object)
///
/// Unknown top-level fields emitted by the model are kept in `extra` and
/// serialized back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorResponse {
    #[serde(alias = "response")]
    pub response_text: String,
    #[serde(default)]
    pub changes: Vec<SiteChange>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GeneratorResponse {
    pub fn new(response_text: impl Into<String>, changes: Vec<SiteChange>) -> Self {
        Self {
            response_text: response_text.into(),
            changes,
            extra: serde_json::Map::new(),
        }
    }

    /// Decode a model's JSON object into a response.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| DomainError::InvalidResponse(e.to_string()))
    }
}

/// The single output of a chat turn
///
/// Serializes as the generator response with `imageDecision` (always) and
/// `imageUrls` (only when images were supplied) added at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    #[serde(flatten)]
    pub response: GeneratorResponse,
    pub image_decision: ImageDecision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<ImageRef>>,
}

/// Top-level keys owned by [`CombinedResult`], never by the generator
const RESERVED_RESULT_KEYS: [&str; 2] = ["imageDecision", "imageUrls"];

impl CombinedResult {
    /// Keys a model may echo back are dropped from `extra`; the pipeline's
    /// own values are authoritative.
    pub fn merge(
        mut response: GeneratorResponse,
        image_decision: ImageDecision,
        images: Vec<ImageRef>,
    ) -> Self {
        for key in RESERVED_RESULT_KEYS {
            response.extra.remove(key);
        }
        Self {
            response,
            image_decision,
            image_urls: (!images.is_empty()).then_some(images),
        }
    }
}
