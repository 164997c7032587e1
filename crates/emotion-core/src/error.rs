//! Error type for boundary service operations.

use thiserror::Error;

/// Errors that can occur when talking to a remote service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP response from the service.
    #[error("service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response arrived but could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Image payload could not be decoded or stored.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
