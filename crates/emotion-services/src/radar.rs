//! Radar renderer client.

use async_trait::async_trait;
use emotion_core::{DateWindow, EmotionProfile, RadarRenderer, RadarReport, ServiceError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http_client;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RadarRequest<'a> {
    user_id: &'a str,
    start_date: String,
    end_date: String,
    emotion_scores: &'a EmotionProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RadarResponse {
    kpi_text: String,
    radar_image_base64: String,
}

/// Client for the emotion radar rendering service.
///
/// Any failure is logged and yields `None`; the composer falls back to a
/// textual failure notice instead of an image part.
#[derive(Debug, Clone)]
pub struct HttpRadarRenderer {
    http: Client,
    endpoint: String,
}

impl HttpRadarRenderer {
    /// Create a renderer client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ServiceError> {
        Ok(Self {
            http: http_client()?,
            endpoint: format!("{}/draw_emotion_radar", base_url.into()),
        })
    }

    async fn request(
        &self,
        user_id: &str,
        window: &DateWindow,
        profile: &EmotionProfile,
    ) -> Result<RadarReport, ServiceError> {
        debug!("Radar request: {}", self.endpoint);

        let request = RadarRequest {
            user_id,
            start_date: window.start.to_string(),
            end_date: window.end.to_string(),
            emotion_scores: profile,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
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

        let parsed: RadarResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))?;

        Ok(RadarReport {
            kpi_text: parsed.kpi_text,
            image_base64: parsed.radar_image_base64,
        })
    }
}

#[async_trait]
impl RadarRenderer for HttpRadarRenderer {
    async fn render(
        &self,
        user_id: &str,
        window: &DateWindow,
        profile: &EmotionProfile,
    ) -> Option<RadarReport> {
        match self.request(user_id, window, profile).await {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(error = %e, "radar rendering failed");
                None
            }
        }
    }
}
