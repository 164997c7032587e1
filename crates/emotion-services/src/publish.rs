//! Image publication strategies.
//!
//! The rendered radar chart reaches the user either inlined as a data URI
//! or uploaded to object storage and referenced by public URL. Both
//! strategies satisfy [`ImagePublisher`] with the same observable contract.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use emotion_core::{ImageLink, ImagePublisher, ServiceError};
use reqwest::Client;
use tracing::debug;

use crate::http_client;

/// Inlines the chart as a `data:image/png;base64,` URI. No hosting backend
/// involved, so publication cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriPublisher;

#[async_trait]
impl ImagePublisher for DataUriPublisher {
    async fn publish(&self, _user_id: &str, image_base64: &str) -> Result<ImageLink, ServiceError> {
        Ok(ImageLink::same(format!(
            "data:image/png;base64,{}",
            image_base64
        )))
    }
}

/// Uploads the decoded chart bytes to an object-storage HTTP endpoint under
/// a unique per-user key and returns the publicly fetchable URL.
#[derive(Debug, Clone)]
pub struct HostedImagePublisher {
    http: Client,
    upload_base_url: String,
    public_base_url: String,
}

impl HostedImagePublisher {
    /// Create a publisher that `PUT`s to `upload_base_url` and links images
    /// under `public_base_url`.
    pub fn new(
        upload_base_url: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            http: http_client()?,
            upload_base_url: upload_base_url.into(),
            public_base_url: public_base_url.into(),
        })
    }

    /// Unique per-user object key for one published chart.
    fn object_key(user_id: &str) -> String {
        format!("radar/{}/{}.png", user_id, Utc::now().timestamp_millis())
    }
}

#[async_trait]
impl ImagePublisher for HostedImagePublisher {
    async fn publish(&self, user_id: &str, image_base64: &str) -> Result<ImageLink, ServiceError> {
        let bytes = BASE64
            .decode(image_base64)
            .map_err(|e| ServiceError::InvalidImage(e.to_string()))?;

        let key = Self::object_key(user_id);
        let upload_url = format!("{}/{}", self.upload_base_url, urlencoding::encode(&key));
        debug!("Uploading radar image: {}", upload_url);

        let response = self
            .http
            .put(&upload_url)
            .header("Content-Type", "image/png")
            .body(bytes)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ImageLink::same(format!("{}/{}", self.public_base_url, key)))
    }
}
