//! Per-event routing and end-to-end pipeline drive.

use std::sync::Arc;

use chrono::Utc;
use emotion_core::{
    CareMessageSource, DateWindow, ImagePublisher, InboundEvent, RadarRenderer,
    SentimentClassifier,
};
use score_store::{NewScoreRecord, ScoreStore};
use tracing::{debug, error, info, warn};

use crate::aggregator::aggregate;
use crate::composer;
use crate::error::PipelineError;
use crate::sender::ReplySender;

/// Trigger phrase that selects the aggregation pipeline.
pub const DEFAULT_TRIGGER_PHRASE: &str = "心情追蹤";

/// Default aggregation lookback, in days, ending today.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A reply was composed and sent.
    Replied,
    /// The event was not actionable (non-text, no reply destination, or no
    /// sender id). Not an error.
    Ignored,
}

/// Routes each inbound event to the aggregation or scoring pipeline and
/// drives it end to end.
///
/// All collaborators are injected at construction; the router keeps no
/// per-event state, so events in a batch can be handled concurrently.
pub struct EventRouter {
    store: Arc<dyn ScoreStore>,
    classifier: Arc<dyn SentimentClassifier>,
    care: Arc<dyn CareMessageSource>,
    radar: Arc<dyn RadarRenderer>,
    publisher: Arc<dyn ImagePublisher>,
    sender: Arc<dyn ReplySender>,
    trigger_phrase: String,
    lookback_days: u32,
}

impl EventRouter {
    /// Create a router with the given collaborators and default trigger
    /// phrase and lookback.
    pub fn new(
        store: Arc<dyn ScoreStore>,
        classifier: Arc<dyn SentimentClassifier>,
        care: Arc<dyn CareMessageSource>,
        radar: Arc<dyn RadarRenderer>,
        publisher: Arc<dyn ImagePublisher>,
        sender: Arc<dyn ReplySender>,
    ) -> Self {
        Self {
            store,
            classifier,
            care,
            radar,
            publisher,
            sender,
            trigger_phrase: DEFAULT_TRIGGER_PHRASE.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Override the trigger phrase.
    pub fn with_trigger_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.trigger_phrase = phrase.into();
        self
    }

    /// Override the aggregation lookback.
    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Handle one inbound event.
    ///
    /// Non-text events, events without a reply destination and events
    /// without a sender id are ignored. A store or send failure fails this
    /// event only; other events in the same batch are unaffected.
    pub async fn handle_event(&self, event: &InboundEvent) -> Result<EventOutcome, PipelineError> {
        let Some(text) = event.message_text() else {
            debug!("ignoring non-text event");
            return Ok(EventOutcome::Ignored);
        };
        let Some(reply_token) = event.reply_token.as_deref() else {
            debug!("ignoring event without reply destination");
            return Ok(EventOutcome::Ignored);
        };
        if event.user_id.is_empty() {
            debug!("ignoring event without sender id");
            return Ok(EventOutcome::Ignored);
        }

        if text.contains(&self.trigger_phrase) {
            self.run_aggregation(&event.user_id, reply_token).await
        } else {
            self.run_scoring(&event.user_id, reply_token, text).await
        }
    }

    /// Aggregation pipeline: store query → fold → radar render → image
    /// publication → two-part reply, or the failure notice.
    async fn run_aggregation(
        &self,
        user_id: &str,
        reply_token: &str,
    ) -> Result<EventOutcome, PipelineError> {
        let window = DateWindow::last_days(Utc::now().date_naive(), self.lookback_days);
        info!(user_id, window = %window, "running aggregation pipeline");

        let profile = aggregate(self.store.as_ref(), user_id, &window)
            .await
            .map_err(|e| {
                error!(user_id, error = %e, "score store query failed");
                e
            })?;

        let parts = match self.radar.render(user_id, &window, &profile).await {
            Some(report) => match self.publisher.publish(user_id, &report.image_base64).await {
                Ok(image) => composer::radar_reply(&window, &report.kpi_text, &image),
                Err(e) => {
                    warn!(user_id, error = %e, "image publication failed");
                    composer::radar_failure_reply()
                }
            },
            None => composer::radar_failure_reply(),
        };

        self.sender.send_reply(reply_token, &parts).await?;
        Ok(EventOutcome::Replied)
    }

    /// Scoring pipeline: classify → persist → single text reply.
    async fn run_scoring(
        &self,
        user_id: &str,
        reply_token: &str,
        text: &str,
    ) -> Result<EventOutcome, PipelineError> {
        let sentiment = self.classifier.classify(text).await;
        debug!(user_id, score = sentiment.score, "message classified");

        self.store
            .append(NewScoreRecord::new(
                user_id,
                sentiment.score,
                sentiment.keywords.clone(),
            ))
            .await
            .map_err(|e| {
                error!(user_id, error = %e, "failed to persist score record");
                e
            })?;

        let part = composer::scoring_reply(text, &sentiment, self.care.as_ref()).await;
        self.sender.send_reply(reply_token, &[part]).await?;
        Ok(EventOutcome::Replied)
    }
}
