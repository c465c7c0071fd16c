//! Image decision value object

use serde::{Deserialize, Serialize};

use crate::core::error::DomainError;

/// Upper bound on the number of images a decision may request
pub const MAX_IMAGE_COUNT: u8 = 5;

/// Whether a request needs new visual assets (Value Object)
///
/// `image_query` and `image_count` are present if and only if
/// `needs_images` is true. The fields are private so that invariant holds
/// for every value in circulation, including decoded model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawImageDecision")]
pub struct ImageDecision {
    needs_images: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_count: Option<u8>,
    explanation: String,
}

/// Loose wire shape as a model emits it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawImageDecision {
    needs_images: Option<bool>,
    image_query: Option<String>,
    image_count: Option<f64>,
    explanation: Option<String>,
}

impl ImageDecision {
    /// A decision that no images are needed
    pub fn not_needed(explanation: impl Into<String>) -> Self {
        Self {
            needs_images: false,
            image_query: None,
            image_count: None,
            explanation: explanation.into(),
        }
    }

    /// A decision that images are needed.
    ///
    /// The query must be non-blank; the count is capped at [`MAX_IMAGE_COUNT`].
    pub fn needed(
        query: impl Into<String>,
        count: u8,
        explanation: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let query = query.into();
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::InvalidDecision(
                "imageQuery is required when needsImages is true".to_string(),
            ));
        }
        Ok(Self {
            needs_images: true,
            image_query: Some(query.to_string()),
            image_count: Some(count.min(MAX_IMAGE_COUNT)),
            explanation: explanation.into(),
        })
    }

    /// Decode a model's JSON object into a decision.
    pub fn from_value(value: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(value).map_err(|e| DomainError::InvalidDecision(e.to_string()))
    }

    pub fn needs_images(&self) -> bool {
        self.needs_images
    }

    pub fn image_query(&self) -> Option<&str> {
        self.image_query.as_deref()
    }

    pub fn image_count(&self) -> Option<u8> {
        self.image_count
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl TryFrom<RawImageDecision> for ImageDecision {
    type Error = DomainError;

    fn try_from(raw: RawImageDecision) -> Result<Self, Self::Error> {
        let needs_images = raw
            .needs_images
            .ok_or_else(|| DomainError::InvalidDecision("missing needsImages".to_string()))?;
        let explanation = raw.explanation.unwrap_or_default();

        if !needs_images {
            return Ok(Self::not_needed(explanation));
        }

        // Models occasionally omit the count or emit it as a float.
        let count = match raw.image_count {
            Some(n) if n.is_finite() => n.round().clamp(0.0, f64::from(MAX_IMAGE_COUNT)) as u8,
            _ => 1,
        };
        Self::needed(raw.image_query.unwrap_or_default(), count, explanation)
    }
}
