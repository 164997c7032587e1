//! Inbound event type consumed by the pipeline.

/// Payload of one inbound chat event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventContent {
    /// A plain text message.
    Text(String),
    /// Anything else (stickers, images, follows, ...). Ignored by the
    /// pipeline, never an error.
    Unsupported,
}

/// One inbound chat event, reduced to what the pipeline needs.
///
/// Constructed by the ingress layer from the platform's webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    /// Opaque stable identifier of the sender.
    pub user_id: String,
    /// Reply destination token, if the platform provided one.
    pub reply_token: Option<String>,
    /// Event payload.
    pub content: EventContent,
}

impl InboundEvent {
    /// Create a text-message event.
    pub fn text(
        user_id: impl Into<String>,
        reply_token: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            reply_token: Some(reply_token.into()),
            content: EventContent::Text(text.into()),
        }
    }

    /// The message text, if this is a text event.
    pub fn message_text(&self) -> Option<&str> {
        match &self.content {
            EventContent::Text(text) => Some(text),
            EventContent::Unsupported => None,
        }
    }
}
