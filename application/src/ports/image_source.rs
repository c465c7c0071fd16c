//! Image source port
//!
//! Supplies images the generator may place in static content. Image search
//! is disabled by default: [`NoImageSource`] always answers with nothing.

use async_trait::async_trait;
use sitewright_domain::ImageRef;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageSourceError {
    #[error("Image search failed: {0}")]
    SearchFailed(String),
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Find up to `count` images matching `query`
    async fn find_images(&self, query: &str, count: u8) -> Result<Vec<ImageRef>, ImageSourceError>;
}

/// Image source that never returns images
pub struct NoImageSource;

#[async_trait]
impl ImageSource for NoImageSource {
    async fn find_images(&self, _query: &str, _count: u8) -> Result<Vec<ImageRef>, ImageSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_image_source_is_empty() {
        let images = NoImageSource.find_images("mountains", 5).await.unwrap();
        assert!(images.is_empty());
    }
}
