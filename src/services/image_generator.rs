use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use crate::{
    constants::game::{IMAGE_MIME_TYPE, IMAGE_SIZE},
    errors::{AppError, AppResult},
    models::domain::GeneratedImage,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> AppResult<GeneratedImage>;
}

/// Pulls the first base64 image out of an images-generation response.
pub fn parse_image_response(response: &Value) -> AppResult<GeneratedImage> {
    let data = response
        .pointer("/data/0/b64_json")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default();

    if data.is_empty() {
        log::error!("Image service response had no image data: {}", response);
        return Err(AppError::UpstreamError(
            "Image service did not return image data".to_string(),
        ));
    }

    Ok(GeneratedImage::new(IMAGE_MIME_TYPE, data))
}

/// Talks to an OpenAI-compatible images endpoint.
pub struct HttpImageGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl HttpImageGenerator {
    pub fn new(base_url: &str, api_key: SecretString, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "prompt": prompt,
            "n": 1,
            "size": IMAGE_SIZE,
            "response_format": "b64_json",
        })
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, prompt: &str) -> AppResult<GeneratedImage> {
        if self.api_key.expose_secret().is_empty() {
            return Err(AppError::UpstreamError(
                "Image service API key is not configured".to_string(),
            ));
        }

        let response: Value = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&self.request_body(prompt))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_image_response(&response)
    }
}
