//! Chat-platform gateway.
//!
//! This crate owns the wire shapes of the platform webhook (inbound event
//! batches) and the reply API (outbound message parts), plus the HTTP
//! client that delivers replies. Signature verification of inbound requests
//! is the platform SDK layer's job and is not handled here.
//!
//! # Example
//!
//! ```no_run
//! use chat_gateway::{ChatClient, GatewayConfig, ReplyMessage};
//!
//! # async fn example() -> Result<(), chat_gateway::GatewayError> {
//! let config = GatewayConfig::new("https://api.line.me", "channel-token");
//! let client = ChatClient::new(config)?;
//!
//! client
//!     .reply(
//!         "reply-token",
//!         &[ReplyMessage::text("情緒分數：0.500\n聽起來你今天心情不錯 😊")],
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::ChatClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use types::{Event, EventSource, MessagePayload, ReplyMessage, WebhookPayload};
