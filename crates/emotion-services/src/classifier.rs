//! Sentiment classifier client.

use async_trait::async_trait;
use emotion_core::{Sentiment, SentimentClassifier, ServiceError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http_client;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    keywords: Vec<String>,
}

/// Client for the sentiment analysis service.
///
/// Any transport, status or decode failure is logged and converted to the
/// neutral default, so a failed classification still produces a valid reply.
#[derive(Debug, Clone)]
pub struct HttpSentimentClassifier {
    http: Client,
    endpoint: String,
}

impl HttpSentimentClassifier {
    /// Create a classifier client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        Ok(Self {
            http: http_client()?,
            endpoint: format!("{}/analyze", base_url.into()),
        })
    }

    async fn request(&self, text: &str) -> Result<Sentiment, ServiceError> {
        debug!("Analyze request: {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
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

        let parsed: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        Ok(Sentiment::new(parsed.score, parsed.keywords))
    }
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    async fn classify(&self, text: &str) -> Sentiment {
        match self.request(text).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                warn!(error = %e, "sentiment analysis failed, using neutral default");
                Sentiment::neutral()
            }
        }
    }
}
