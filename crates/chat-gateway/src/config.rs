//! Configuration for the chat gateway.

use std::env;

use crate::error::GatewayError;

/// Configuration for connecting to the chat-platform API.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the platform API (e.g., "https://api.line.me").
    pub api_base_url: String,
    /// Channel access token for bearer authentication.
    pub access_token: String,
}

impl GatewayConfig {
    /// Create a new configuration.
    pub fn new(api_base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CHANNEL_ACCESS_TOKEN` | Channel access token | (required) |
    /// | `CHAT_API_URL` | Platform API base URL | `https://api.line.me` |
    pub fn from_env() -> Result<Self, GatewayError> {
        let access_token = env::var("CHANNEL_ACCESS_TOKEN")
            .map_err(|_| GatewayError::Config("CHANNEL_ACCESS_TOKEN not set".to_string()))?;

        let api_base_url =
            env::var("CHAT_API_URL").unwrap_or_else(|_| "https://api.line.me".to_string());

        Ok(Self {
            api_base_url,
            access_token,
        })
    }

    /// Get the reply endpoint URL.
    pub fn reply_endpoint(&self) -> String {
        format!("{}/v2/bot/message/reply", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_endpoint_joins_base_url() {
        let config = GatewayConfig::new("https://api.line.me", "token");
        assert_eq!(
            config.reply_endpoint(),
            "https://api.line.me/v2/bot/message/reply"
        );
    }
}
