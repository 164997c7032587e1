//! Event-processing pipeline for the mood-tracking bot.
//!
//! This crate provides the [`EventRouter`] type which drives each inbound
//! event end to end, with every external collaborator injected behind a
//! trait so tests can substitute fakes.
//!
//! # Architecture
//!
//! ```text
//! Inbound event (from webhook ingress)
//!          ↓
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       EVENT ROUTER                           │
//! │                                                              │
//! │  Non-text / no reply token → ignored (no reply, no error)    │
//! │                                                              │
//! │  Text containing trigger phrase → AGGREGATION pipeline:      │
//! │    query store over window → fold into EmotionProfile        │
//! │    → render radar → publish image → text + image reply       │
//! │    (render/publish failure → single failure-notice text)     │
//! │                                                              │
//! │  Any other text → SCORING pipeline:                          │
//! │    classify (neutral on failure) → append ScoreRecord        │
//! │    → compose score reply (caring message when negative)      │
//! └──────────────────────────────────────────────────────────────┘
//!          ↓
//! Reply parts (via ReplySender)
//! ```
//!
//! Events in a batch share no state; the score store is the only shared
//! resource and is append-only.

mod aggregator;
mod composer;
mod error;
mod router;
mod sender;

pub use aggregator::{aggregate, fold_records};
pub use composer::{
    format_score, radar_failure_reply, radar_reply, scoring_reply, DEFAULT_CARING_MESSAGE,
    NEGATIVE_THRESHOLD, NEUTRAL_REPLY, POSITIVE_REPLY, POSITIVE_THRESHOLD, RADAR_FAILURE_REPLY,
};
pub use error::PipelineError;
pub use router::{EventOutcome, EventRouter, DEFAULT_LOOKBACK_DAYS, DEFAULT_TRIGGER_PHRASE};
pub use sender::{LoggingSender, NoOpSender, ReplyPart, ReplySender};

// Re-export commonly used types from dependencies
pub use emotion_core::{EventContent, InboundEvent};
