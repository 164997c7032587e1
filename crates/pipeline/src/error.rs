//! Error types for pipeline operations.

use score_store::StoreError;
use thiserror::Error;

/// Errors that can fail a single event's processing.
///
/// Upstream-service failures never reach this type: the classifier falls
/// back to neutral, the care generator to the default message, and the
/// radar renderer to a textual failure notice. What remains is the store
/// and the reply transport.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Score store read or write failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Reply delivery failed.
    #[error("send failed: {0}")]
    Send(String),
}
