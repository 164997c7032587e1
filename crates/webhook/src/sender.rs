//! Reply delivery over the chat-gateway client.

use async_trait::async_trait;
use chat_gateway::{ChatClient, ReplyMessage};
use pipeline::{PipelineError, ReplyPart, ReplySender};

/// [`ReplySender`] backed by the platform reply API.
pub struct GatewaySender {
    client: ChatClient,
}

impl GatewaySender {
    /// Wrap a chat client.
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

/// Map pipeline reply parts onto the platform wire shape.
fn to_messages(parts: &[ReplyPart]) -> Vec<ReplyMessage> {
    parts
        .iter()
        .map(|part| match part {
            ReplyPart::Text { text } => ReplyMessage::text(text.clone()),
            ReplyPart::Image {
                original_url,
                preview_url,
            } => ReplyMessage::image(original_url.clone(), preview_url.clone()),
        })
        .collect()
}

#[async_trait]
impl ReplySender for GatewaySender {
    async fn send_reply(&self, reply_token: &str, parts: &[ReplyPart]) -> Result<(), PipelineError> {
        let messages = to_messages(parts);
        self.client
            .reply(reply_token, &messages)
            .await
            .map_err(|e| PipelineError::Send(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_parts_onto_platform_messages() {
        let parts = [
            ReplyPart::text("情緒分數：0.500\n聽起來你今天心情不錯 😊"),
            ReplyPart::Image {
                original_url: "https://img/full.png".to_string(),
                preview_url: "https://img/prev.png".to_string(),
            },
        ];

        let messages = to_messages(&parts);
        assert_eq!(
            messages,
            vec![
                ReplyMessage::text("情緒分數：0.500\n聽起來你今天心情不錯 😊"),
                ReplyMessage::image("https://img/full.png", "https://img/prev.png"),
            ]
        );
    }
}
