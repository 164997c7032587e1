//! Webhook callback endpoint.
//!
//! The platform delivers events in batches. Every event in a batch is
//! processed concurrently and gets its own result slot; one failing event
//! never aborts its siblings.

use axum::extract::State;
use axum::Json;
use chat_gateway::{Event, WebhookPayload};
use emotion_core::{EventContent, InboundEvent};
use futures::future::join_all;
use pipeline::{EventOutcome, EventRouter};
use serde::Serialize;
use tracing::{error, info};

use crate::state::AppState;

/// Per-event result slot, in batch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EventResult {
    /// A reply was sent.
    Replied,
    /// The event was not actionable.
    Ignored,
    /// Processing failed; the other events in the batch are unaffected.
    Failed { error: String },
}

/// The callback response body.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<EventResult>,
}

/// `POST /callback` handler.
pub async fn callback(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Json<BatchResponse> {
    info!(events = payload.events.len(), "Webhook batch received");
    let results = process_batch(&state.router, &payload.events).await;
    Json(BatchResponse { results })
}

/// Process every event in the batch concurrently, one result per slot.
pub(crate) async fn process_batch(router: &EventRouter, events: &[Event]) -> Vec<EventResult> {
    join_all(events.iter().map(|event| async move {
        match router.handle_event(&to_inbound(event)).await {
            Ok(EventOutcome::Replied) => EventResult::Replied,
            Ok(EventOutcome::Ignored) => EventResult::Ignored,
            Err(e) => {
                error!(error = %e, "Event processing failed");
                EventResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }))
    .await
}

/// Reduce a platform event to what the pipeline consumes.
fn to_inbound(event: &Event) -> InboundEvent {
    let content = match (event.event_type.as_str(), &event.message) {
        ("message", Some(message)) if message.message_type == "text" => match &message.text {
            Some(text) => EventContent::Text(text.clone()),
            None => EventContent::Unsupported,
        },
        _ => EventContent::Unsupported,
    };

    InboundEvent {
        user_id: event.source.user_id.clone().unwrap_or_default(),
        reply_token: event.reply_token.clone(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use emotion_core::{
        CareMessageSource, DateWindow, EmotionProfile, ImageLink, ImagePublisher, RadarRenderer,
        RadarReport, Sentiment, SentimentClassifier, ServiceError,
    };
    use pipeline::NoOpSender;
    use score_store::{NewScoreRecord, ScoreRecord, ScoreStore, StoreError};
    use std::sync::{Arc, Mutex};

    /// In-memory store that refuses writes for one user id.
    #[derive(Default)]
    struct FlakyStore {
        fail_for_user: Option<String>,
        records: Mutex<Vec<ScoreRecord>>,
    }

    #[async_trait]
    impl ScoreStore for FlakyStore {
        async fn append(&self, record: NewScoreRecord) -> score_store::Result<ScoreRecord> {
            if self.fail_for_user.as_deref() == Some(record.user_id.as_str()) {
                return Err(StoreError::Unavailable("write refused".to_string()));
            }
            let mut records = self.records.lock().unwrap();
            let stored = ScoreRecord {
                id: records.len() as i64 + 1,
                user_id: record.user_id,
                score: record.score,
                keywords: record.keywords,
                created_at: "2025-07-12T10:00:00Z".to_string(),
            };
            records.push(stored.clone());
            Ok(stored)
        }

        async fn query(
            &self,
            user_id: &str,
            _window: &DateWindow,
        ) -> score_store::Result<Vec<ScoreRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    struct NeutralClassifier;

    #[async_trait]
    impl SentimentClassifier for NeutralClassifier {
        async fn classify(&self, _text: &str) -> Sentiment {
            Sentiment::neutral()
        }
    }

    struct FixedCare;

    #[async_trait]
    impl CareMessageSource for FixedCare {
        async fn caring_message(
            &self,
            _text: &str,
            _keywords: &[String],
        ) -> Result<String, ServiceError> {
            Ok("辛苦了".to_string())
        }
    }

    struct FixedRadar;

    #[async_trait]
    impl RadarRenderer for FixedRadar {
        async fn render(
            &self,
            _user_id: &str,
            _window: &DateWindow,
            _profile: &EmotionProfile,
        ) -> Option<RadarReport> {
            Some(RadarReport {
                kpi_text: "- 緊張：0.00".to_string(),
                image_base64: "aGk=".to_string(),
            })
        }
    }

    struct InlinePublisher;

    #[async_trait]
    impl ImagePublisher for InlinePublisher {
        async fn publish(
            &self,
            _user_id: &str,
            image_base64: &str,
        ) -> Result<ImageLink, ServiceError> {
            Ok(ImageLink::same(format!(
                "data:image/png;base64,{}",
                image_base64
            )))
        }
    }

    fn router_with_store(store: FlakyStore) -> EventRouter {
        EventRouter::new(
            Arc::new(store),
            Arc::new(NeutralClassifier),
            Arc::new(FixedCare),
            Arc::new(FixedRadar),
            Arc::new(InlinePublisher),
            Arc::new(NoOpSender),
        )
    }

    fn text_event(user_id: &str, reply_token: &str, text: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "type": "message",
            "message": { "type": "text", "text": text },
            "source": { "userId": user_id },
            "replyToken": reply_token,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn failing_event_does_not_abort_its_siblings() {
        let router = router_with_store(FlakyStore {
            fail_for_user: Some("user-2".to_string()),
            ..Default::default()
        });

        let events = vec![
            text_event("user-1", "rt-1", "今天還行"),
            text_event("user-2", "rt-2", "今天還行"),
            text_event("user-3", "rt-3", "今天還行"),
        ];
        let results = process_batch(&router, &events).await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], EventResult::Replied);
        assert!(matches!(results[1], EventResult::Failed { .. }));
        assert_eq!(results[2], EventResult::Replied);
    }

    #[tokio::test]
    async fn non_message_events_fill_their_slot_as_ignored() {
        let router = router_with_store(FlakyStore::default());

        let follow: Event = serde_json::from_value(serde_json::json!({
            "type": "follow",
            "source": { "userId": "user-1" },
        }))
        .unwrap();
        let events = vec![follow, text_event("user-1", "rt-1", "hello")];
        let results = process_batch(&router, &events).await;

        assert_eq!(results, vec![EventResult::Ignored, EventResult::Replied]);
    }

    #[tokio::test]
    async fn empty_batch_yields_empty_results() {
        let router = router_with_store(FlakyStore::default());
        let results = process_batch(&router, &[]).await;
        assert!(results.is_empty());
    }

    #[test]
    fn sticker_message_maps_to_unsupported() {
        let sticker: Event = serde_json::from_value(serde_json::json!({
            "type": "message",
            "message": { "type": "sticker" },
            "source": { "userId": "user-1" },
            "replyToken": "rt-1",
        }))
        .unwrap();

        let inbound = to_inbound(&sticker);
        assert_eq!(inbound.content, EventContent::Unsupported);
        assert_eq!(inbound.user_id, "user-1");
    }

    #[test]
    fn missing_user_id_maps_to_empty_string() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "type": "message",
            "message": { "type": "text", "text": "hi" },
            "source": {},
            "replyToken": "rt-1",
        }))
        .unwrap();

        let inbound = to_inbound(&event);
        assert_eq!(inbound.user_id, "");
    }

    #[test]
    fn results_serialize_with_status_tags() {
        let results = vec![
            EventResult::Replied,
            EventResult::Failed {
                error: "store error".to_string(),
            },
        ];
        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(json[0]["status"], "replied");
        assert_eq!(json[1]["status"], "failed");
        assert_eq!(json[1]["error"], "store error");
    }
}
