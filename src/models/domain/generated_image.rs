use serde::{Deserialize, Serialize};

/// A single generated picture, base64 encoded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub mime_type: String,
    pub image_base64: String,
}

impl GeneratedImage {
    pub fn new(mime_type: &str, image_base64: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            image_base64: image_base64.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_base64.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let image = GeneratedImage::new("image/png", "iVBORw0KGgo=");
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["imageBase64"], "iVBORw0KGgo=");
    }

    #[test]
    fn test_whitespace_payload_is_empty() {
        assert!(GeneratedImage::new("image/png", "  ").is_empty());
        assert!(!GeneratedImage::new("image/png", "AAAA").is_empty());
    }
}
