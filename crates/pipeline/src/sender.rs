//! Reply sender trait and implementations.

use async_trait::async_trait;

use crate::error::PipelineError;

/// One unit of a possibly multi-part outbound reply.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyPart {
    /// A plain text part.
    Text { text: String },
    /// An image part with full-size and preview references.
    Image {
        original_url: String,
        preview_url: String,
    },
}

impl ReplyPart {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ReplyPart::Text { text: text.into() }
    }
}

/// Trait for delivering replies to the originating event's destination.
///
/// Abstracted to support different transports (platform API, tests, etc.)
#[async_trait]
pub trait ReplySender: Send + Sync {
    /// Send the reply parts to the given reply destination token.
    async fn send_reply(&self, reply_token: &str, parts: &[ReplyPart])
        -> Result<(), PipelineError>;
}

/// A no-op reply sender for testing that discards all replies.
#[derive(Debug, Clone, Default)]
pub struct NoOpSender;

#[async_trait]
impl ReplySender for NoOpSender {
    async fn send_reply(
        &self,
        _reply_token: &str,
        _parts: &[ReplyPart],
    ) -> Result<(), PipelineError> {
        Ok(())
    }
}

/// A logging reply sender for debugging that logs all replies.
#[derive(Debug, Clone, Default)]
pub struct LoggingSender;

#[async_trait]
impl ReplySender for LoggingSender {
    async fn send_reply(
        &self,
        reply_token: &str,
        parts: &[ReplyPart],
    ) -> Result<(), PipelineError> {
        for part in parts {
            match part {
                ReplyPart::Text { text } => {
                    tracing::info!("Reply to {}: {}", reply_token, text);
                }
                ReplyPart::Image { original_url, .. } => {
                    tracing::info!("Reply to {}: [image {}]", reply_token, original_url);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_sender() {
        let sender = NoOpSender;

        sender
            .send_reply("rt-1", &[ReplyPart::text("test")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_logging_sender() {
        let sender = LoggingSender;

        sender
            .send_reply(
                "rt-1",
                &[
                    ReplyPart::text("test"),
                    ReplyPart::Image {
                        original_url: "https://img/full.png".to_string(),
                        preview_url: "https://img/prev.png".to_string(),
                    },
                ],
            )
            .await
            .unwrap();
    }
}
