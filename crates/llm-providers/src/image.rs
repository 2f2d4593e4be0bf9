//! Flashcard images: hosted generation or a placeholder.

use std::sync::Arc;

use adapt_core::{async_trait, GeneratedImage, ImageGenerator, ProviderError};
use tracing::{debug, info};

use crate::api_types::{ImageRequest, ImageResponse};
use crate::client::HttpClient;
use crate::config::LlmConfig;

/// Token returned by [`PlaceholderImageGenerator`].
pub const PLACEHOLDER_IMAGE_BASE64: &str = "PLACEHOLDER_IMAGE_BASE64";

/// Build the image prompt for a flashcard.
pub fn build_flashcard_prompt(summary: &str) -> String {
    format!(
        "A simple, high-contrast educational flashcard illustrating the key points below. \
         Plain background, large clear shapes, no small text.\n\n{}",
        summary
    )
}

/// Select the image generator for a configuration.
///
/// Without `image_model` the placeholder generator is used.
pub fn image_generator(config: &LlmConfig) -> Result<Arc<dyn ImageGenerator>, ProviderError> {
    match &config.image_model {
        Some(model) => {
            info!("Using image model: {}", model);
            Ok(Arc::new(HttpImageGenerator::new(config.clone(), model.clone())?))
        }
        None => {
            info!("No image model configured; flashcards use placeholder images");
            Ok(Arc::new(PlaceholderImageGenerator::new()))
        }
    }
}

/// Generates flashcard images with a hosted image model.
pub struct HttpImageGenerator {
    http: HttpClient,
    model: String,
}

impl HttpImageGenerator {
    pub fn new(config: LlmConfig, model: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            http: HttpClient::new(config)?,
            model: model.into(),
        })
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, text: &str) -> Result<GeneratedImage, ProviderError> {
        if text.trim().is_empty() {
            return Ok(GeneratedImage {
                image_base64: String::new(),
            });
        }

        let request = ImageRequest {
            model: self.model.clone(),
            prompt: build_flashcard_prompt(text),
            n: 1,
            response_format: "b64_json".to_string(),
        };

        let response: ImageResponse = self
            .http
            .send_json(self.http.post("/v1/images/generations").json(&request))
            .await?;

        let image_base64 = response
            .data
            .into_iter()
            .find_map(|image| image.b64_json)
            .filter(|b64| !b64.is_empty())
            .ok_or(ProviderError::EmptyOutput)?;

        debug!(image_len = image_base64.len(), "Received flashcard image");

        Ok(GeneratedImage { image_base64 })
    }

    fn name(&self) -> &str {
        "HttpImageGenerator"
    }
}

/// Stands in for image generation when no image model is configured.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderImageGenerator;

impl PlaceholderImageGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageGenerator for PlaceholderImageGenerator {
    async fn generate(&self, text: &str) -> Result<GeneratedImage, ProviderError> {
        let image_base64 = if text.trim().is_empty() {
            String::new()
        } else {
            PLACEHOLDER_IMAGE_BASE64.to_string()
        };
        Ok(GeneratedImage { image_base64 })
    }

    fn name(&self) -> &str {
        "PlaceholderImageGenerator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholder() {
        let generator = PlaceholderImageGenerator::new();

        let image = generator.generate("Key points").await.unwrap();
        assert_eq!(image.image_base64, PLACEHOLDER_IMAGE_BASE64);

        let empty = generator.generate("").await.unwrap();
        assert!(empty.image_base64.is_empty());
    }

    #[tokio::test]
    async fn test_selects_placeholder_without_model() {
        let config = LlmConfig::builder().api_key("key").build();
        let generator = image_generator(&config).unwrap();
        assert_eq!(generator.name(), "PlaceholderImageGenerator");

        let config = LlmConfig::builder().api_key("key").image_model("painter").build();
        let generator = image_generator(&config).unwrap();
        assert_eq!(generator.name(), "HttpImageGenerator");
    }

    #[test]
    fn test_flashcard_prompt_includes_summary() {
        let prompt = build_flashcard_prompt("Cells divide by mitosis.");
        assert!(prompt.ends_with("\n\nCells divide by mitosis."));
    }
}
