//! Error types for the chat gateway.

use thiserror::Error;

/// Errors that can occur when talking to the chat platform.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the platform API.
    #[error("platform API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
