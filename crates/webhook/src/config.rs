//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Webhook server configuration.
///
/// Chat platform credentials (`CHANNEL_ACCESS_TOKEN`, `CHAT_API_URL`) are
/// read by `chat-gateway` itself.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Sentiment analysis service base URL.
    pub nlp_service_url: String,
    /// Caring-message service base URL.
    pub care_service_url: String,
    /// Radar chart service base URL.
    pub radar_service_url: String,
    /// Object-storage upload base URL. When unset, radar images are
    /// inlined as data URIs.
    pub image_upload_url: Option<String>,
    /// Public base URL for uploaded images.
    pub image_public_url: Option<String>,
    /// Override for the aggregation trigger phrase.
    pub trigger_phrase: Option<String>,
    /// Override for the aggregation lookback, in days.
    pub lookback_days: Option<u32>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `WEBHOOK_ADDR` | Server bind address | `0.0.0.0:8080` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:moodbot.db?mode=rwc` |
    /// | `NLP_SERVICE_URL` | Sentiment analysis service base URL | (required) |
    /// | `CARE_SERVICE_URL` | Caring-message service base URL | (required) |
    /// | `RADAR_SERVICE_URL` | Radar chart service base URL | (required) |
    /// | `IMAGE_UPLOAD_URL` | Object-storage upload base URL | (unset: inline data URIs) |
    /// | `IMAGE_PUBLIC_URL` | Public base URL for uploaded images | (required with `IMAGE_UPLOAD_URL`) |
    /// | `TRIGGER_PHRASE` | Aggregation trigger phrase | `心情追蹤` |
    /// | `LOOKBACK_DAYS` | Aggregation lookback in days | `7` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("WEBHOOK_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:moodbot.db?mode=rwc".to_string());

        let nlp_service_url = required("NLP_SERVICE_URL")?;
        let care_service_url = required("CARE_SERVICE_URL")?;
        let radar_service_url = required("RADAR_SERVICE_URL")?;

        let image_upload_url = env::var("IMAGE_UPLOAD_URL").ok();
        let image_public_url = env::var("IMAGE_PUBLIC_URL").ok();
        if image_upload_url.is_some() && image_public_url.is_none() {
            return Err(ConfigError::MissingImagePublicUrl);
        }

        let trigger_phrase = env::var("TRIGGER_PHRASE").ok();
        let lookback_days = match env::var("LOOKBACK_DAYS") {
            Ok(value) => Some(
                value
                    .parse()
                    .map_err(|_| ConfigError::InvalidLookbackDays(value))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            addr,
            database_url,
            nlp_service_url,
            care_service_url,
            radar_service_url,
            image_upload_url,
            image_public_url,
            trigger_phrase,
            lookback_days,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid WEBHOOK_ADDR format")]
    InvalidAddr,

    #[error("{0} environment variable is required")]
    MissingVar(&'static str),

    #[error("IMAGE_PUBLIC_URL is required when IMAGE_UPLOAD_URL is set")]
    MissingImagePublicUrl,

    #[error("Invalid LOOKBACK_DAYS value: {0}")]
    InvalidLookbackDays(String),
}
