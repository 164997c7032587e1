//! Wire types for the platform webhook and reply API.

use serde::{Deserialize, Serialize};

/// The webhook request body: a batch of events.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One inbound platform event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event type tag (e.g., "message", "follow").
    #[serde(rename = "type")]
    pub event_type: String,
    /// Message payload, present for message events.
    #[serde(default)]
    pub message: Option<MessagePayload>,
    /// Sender information.
    pub source: EventSource,
    /// Reply destination token. Absent for events that cannot be replied to.
    #[serde(default)]
    pub reply_token: Option<String>,
}

/// Message payload of a message event.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    /// Message type tag (e.g., "text", "sticker").
    #[serde(rename = "type")]
    pub message_type: String,
    /// Text content, present for text messages.
    #[serde(default)]
    pub text: Option<String>,
}

/// Sender of an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    /// Opaque stable user identifier.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// One outbound reply part.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReplyMessage {
    /// A plain text part.
    Text { text: String },
    /// An image part with full-size and preview references.
    #[serde(rename_all = "camelCase")]
    Image {
        original_content_url: String,
        preview_image_url: String,
    },
}

impl ReplyMessage {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        ReplyMessage::Text { text: text.into() }
    }

    /// Create an image part.
    pub fn image(original: impl Into<String>, preview: impl Into<String>) -> Self {
        ReplyMessage::Image {
            original_content_url: original.into(),
            preview_image_url: preview.into(),
        }
    }
}

/// The reply API request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReplyRequest<'a> {
    pub reply_token: &'a str,
    pub messages: &'a [ReplyMessage],
}
