//! Caring-message generator client.

use async_trait::async_trait;
use emotion_core::{CareMessageSource, ServiceError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http_client;

#[derive(Debug, Serialize)]
struct CareRequest<'a> {
    text: &'a str,
    keywords: &'a [String],
}

#[derive(Debug, Deserialize)]
struct CareResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the caring-message generator.
///
/// Failures (including a response without a message) propagate as
/// [`ServiceError`]; the reply composer substitutes the fixed default
/// caring message.
#[derive(Debug, Clone)]
pub struct HttpCareMessageSource {
    http: Client,
    endpoint: String,
}

impl HttpCareMessageSource {
    /// Create a client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        Ok(Self {
            http: http_client()?,
            endpoint: format!("{}/care", base_url.into()),
        })
    }
}

#[async_trait]
impl CareMessageSource for HttpCareMessageSource {
    async fn caring_message(
        &self,
        text: &str,
        keywords: &[String],
    ) -> Result<String, ServiceError> {
        debug!("Care request: {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&CareRequest { text, keywords })
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

        let parsed: CareResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        parsed
            .message
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ServiceError::InvalidResponse("no message in response".to_string()))
    }
}
