//! Static image generator.

use adapt_core::{async_trait, GeneratedImage, ImageGenerator, ProviderError};

/// A 1x1 transparent PNG.
const BLANK_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// An image generator that returns the same image for any text.
#[derive(Debug, Clone)]
pub struct StaticImage {
    image_base64: String,
}

impl StaticImage {
    pub fn new(image_base64: impl Into<String>) -> Self {
        Self {
            image_base64: image_base64.into(),
        }
    }
}

impl Default for StaticImage {
    fn default() -> Self {
        Self::new(BLANK_PNG_BASE64)
    }
}

#[async_trait]
impl ImageGenerator for StaticImage {
    async fn generate(&self, text: &str) -> Result<GeneratedImage, ProviderError> {
        if text.trim().is_empty() {
            return Ok(GeneratedImage {
                image_base64: String::new(),
            });
        }
        Ok(GeneratedImage {
            image_base64: self.image_base64.clone(),
        })
    }

    fn name(&self) -> &str {
        "StaticImage"
    }
}
