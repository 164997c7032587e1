//! Core traits and types for the mood-tracking bot.
//!
//! This crate provides the shared interface between the event pipeline and
//! its external collaborators. It defines:
//!
//! - [`SentimentClassifier`] / [`CareMessageSource`] / [`RadarRenderer`] /
//!   [`ImagePublisher`] - Traits for the remote services at the boundary
//! - [`InboundEvent`] - One inbound chat event, stripped of platform plumbing
//! - [`EmotionCategory`] / [`EmotionProfile`] - The closed category set and
//!   the aggregated per-category averages
//! - [`Sentiment`] - A single message's classifier result
//! - [`ServiceError`] - Error type for boundary operations
//!
//! # Example
//!
//! ```rust
//! use emotion_core::{Sentiment, SentimentClassifier, async_trait};
//!
//! struct AlwaysCalm;
//!
//! #[async_trait]
//! impl SentimentClassifier for AlwaysCalm {
//!     async fn classify(&self, _text: &str) -> Sentiment {
//!         Sentiment::neutral()
//!     }
//! }
//! ```

mod error;
mod event;
mod profile;
mod report;
mod sentiment;
mod traits;
mod window;

pub use error::ServiceError;
pub use event::{EventContent, InboundEvent};
pub use profile::{round3, EmotionCategory, EmotionProfile};
pub use report::{ImageLink, RadarReport};
pub use sentiment::Sentiment;
pub use traits::{CareMessageSource, ImagePublisher, RadarRenderer, SentimentClassifier};
pub use window::DateWindow;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
