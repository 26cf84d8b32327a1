use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::GeneratedImage,
    services::image_generator::ImageGenerator,
};

/// Turns a free-text description into a picture.
pub struct ImageService {
    generator: Arc<dyn ImageGenerator>,
}

impl ImageService {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_image(&self, username: &str, prompt: &str) -> AppResult<GeneratedImage> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AppError::ValidationError(
                "Describe the image you want to create".to_string(),
            ));
        }

        let image = self.generator.generate(prompt).await.map_err(|e| {
            log::error!("Could not generate image for '{}': {}", username, e);
            e
        })?;
        if image.is_empty() {
            return Err(AppError::UpstreamError(
                "Image service returned an empty image".to_string(),
            ));
        }

        log::info!("Generated image for '{}'", username);
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::image_generator::MockImageGenerator;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_prompt_is_trimmed_before_generation() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_generate()
            .with(eq("a robot doing sums"))
            .times(1)
            .returning(|_| Ok(GeneratedImage::new("image/png", "AAAA")));

        let service = ImageService::new(Arc::new(generator));
        let image = service
            .generate_image("maya", "  a robot doing sums \n")
            .await
            .unwrap();
        assert_eq!(image.image_base64, "AAAA");
    }

    #[tokio::test]
    async fn test_blank_prompt_never_reaches_generator() {
        let mut generator = MockImageGenerator::new();
        generator.expect_generate().never();

        let service = ImageService::new(Arc::new(generator));
        let result = service.generate_image("maya", "   ").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_empty_image_is_upstream_error() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(GeneratedImage::new("image/png", "")));

        let service = ImageService::new(Arc::new(generator));
        let result = service.generate_image("maya", "a cat").await;
        assert!(matches!(result, Err(AppError::UpstreamError(_))));
    }

    #[tokio::test]
    async fn test_generator_failure_is_passed_through() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::UpstreamError("quota".to_string())));

        let service = ImageService::new(Arc::new(generator));
        let result = service.generate_image("maya", "a cat").await;
        assert!(matches!(result, Err(AppError::UpstreamError(_))));
    }
}
