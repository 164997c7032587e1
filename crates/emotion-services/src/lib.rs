//! HTTP adapters for the remote emotion services.
//!
//! One client per upstream, each implementing its `emotion-core` trait:
//!
//! - [`HttpSentimentClassifier`] - `POST {base}/analyze`, neutral fallback
//!   on any failure
//! - [`HttpCareMessageSource`] - `POST {base}/care`, failures propagate so
//!   the composer can substitute the default caring message
//! - [`HttpRadarRenderer`] - `POST {base}/draw_emotion_radar`, `None` on
//!   any failure
//! - [`DataUriPublisher`] / [`HostedImagePublisher`] - the two image
//!   materialization strategies
//!
//! # Example
//!
//! ```no_run
//! use emotion_core::SentimentClassifier;
//! use emotion_services::HttpSentimentClassifier;
//!
//! # async fn example() -> Result<(), emotion_core::ServiceError> {
//! let classifier = HttpSentimentClassifier::new("http://localhost:5000")?;
//! let sentiment = classifier.classify("今天過得還不錯").await;
//! println!("score: {:.3}", sentiment.score);
//! # Ok(())
//! # }
//! ```

mod care;
mod classifier;
mod publish;
mod radar;

pub use care::HttpCareMessageSource;
pub use classifier::HttpSentimentClassifier;
pub use publish::{DataUriPublisher, HostedImagePublisher};
pub use radar::HttpRadarRenderer;

use std::time::Duration;

use emotion_core::ServiceError;
use reqwest::Client;

/// Per-request timeout for all service calls. A slow upstream delays only
/// its own event; there is no separate per-event budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared reqwest client shape used by every adapter.
pub(crate) fn http_client() -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ServiceError::Configuration(format!("failed to create HTTP client: {}", e)))
}
