//! Chat-platform reply API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{ReplyMessage, ReplyRequest};

/// Client for delivering replies to the chat platform.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    config: GatewayConfig,
}

impl ChatClient {
    /// Create a client with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`GatewayConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send one or more reply parts to a reply destination token.
    pub async fn reply(
        &self,
        reply_token: &str,
        messages: &[ReplyMessage],
    ) -> Result<(), GatewayError> {
        let url = self.config.reply_endpoint();
        debug!("Reply: {} ({} parts)", url, messages.len());

        let request = ReplyRequest {
            reply_token,
            messages,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&request)
            .send()
            .await
            .map_err(GatewayError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
