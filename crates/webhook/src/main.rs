//! Webhook ingress for the mood-tracking bot.
//!
//! Receives platform event batches on `/callback`, routes each event
//! through the scoring or aggregation pipeline, and replies via the chat
//! gateway.

mod config;
mod routes;
mod sender;
mod state;

use std::sync::Arc;

use chat_gateway::ChatClient;
use emotion_core::ImagePublisher;
use emotion_services::{
    DataUriPublisher, HostedImagePublisher, HttpCareMessageSource, HttpRadarRenderer,
    HttpSentimentClassifier,
};
use pipeline::EventRouter;
use score_store::SqliteScoreStore;
use tracing::info;

use crate::config::Config;
use crate::sender::GatewaySender;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting webhook server");

    // Connect to the score store
    let store = SqliteScoreStore::connect(&config.database_url).await?;
    store.migrate().await?;

    // Remote service clients
    let classifier = HttpSentimentClassifier::new(&config.nlp_service_url)?;
    let care = HttpCareMessageSource::new(&config.care_service_url)?;
    let radar = HttpRadarRenderer::new(&config.radar_service_url)?;

    // Image publication strategy
    let publisher: Arc<dyn ImagePublisher> =
        match (&config.image_upload_url, &config.image_public_url) {
            (Some(upload), Some(public)) => {
                info!(public_base = %public, "Publishing radar images to object storage");
                Arc::new(HostedImagePublisher::new(upload, public)?)
            }
            _ => {
                info!("Inlining radar images as data URIs");
                Arc::new(DataUriPublisher)
            }
        };

    // Reply transport
    let chat = ChatClient::from_env()?;
    let reply_sender = Arc::new(GatewaySender::new(chat));

    // Wire the pipeline
    let mut router = EventRouter::new(
        Arc::new(store),
        Arc::new(classifier),
        Arc::new(care),
        Arc::new(radar),
        publisher,
        reply_sender,
    );
    if let Some(phrase) = config.trigger_phrase.clone() {
        router = router.with_trigger_phrase(phrase);
    }
    if let Some(days) = config.lookback_days {
        router = router.with_lookback_days(days);
    }

    // Build application state
    let state = AppState::new(router);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Webhook server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
