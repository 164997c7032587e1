//! Traits for the remote services at the pipeline boundary.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::profile::EmotionProfile;
use crate::report::{ImageLink, RadarReport};
use crate::sentiment::Sentiment;
use crate::window::DateWindow;

/// Scores a message's sentiment and extracts emotion keywords.
///
/// Implementations must recover from their own failures: a failed
/// classification yields [`Sentiment::neutral`], never an error, so the
/// reply pipeline always proceeds.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Sentiment;
}

/// Generates a caring message for a negatively-scored text.
///
/// Failures propagate; the reply composer substitutes a fixed default
/// caring message.
#[async_trait]
pub trait CareMessageSource: Send + Sync {
    async fn caring_message(
        &self,
        text: &str,
        keywords: &[String],
    ) -> Result<String, ServiceError>;
}

/// Renders an emotion radar chart for a user's profile over a window.
///
/// Returns `None` on any failure; the composer falls back to a textual
/// failure notice.
#[async_trait]
pub trait RadarRenderer: Send + Sync {
    async fn render(
        &self,
        user_id: &str,
        window: &DateWindow,
        profile: &EmotionProfile,
    ) -> Option<RadarReport>;
}

/// Materializes a rendered chart into an image reference for the reply.
///
/// Two strategies exist with the same observable contract: inline the image
/// as a data URI, or upload it and return a publicly fetchable URL.
#[async_trait]
pub trait ImagePublisher: Send + Sync {
    async fn publish(&self, user_id: &str, image_base64: &str) -> Result<ImageLink, ServiceError>;
}
