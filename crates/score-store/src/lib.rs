//! SQLite persistence layer for sentiment score records.
//!
//! This crate provides the [`ScoreStore`] interface the pipeline writes and
//! reads through, plus the SQLx-backed [`SqliteScoreStore`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use score_store::{NewScoreRecord, ScoreStore, SqliteScoreStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let store = SqliteScoreStore::connect("sqlite:moodbot.db?mode=rwc").await?;
//!     store.migrate().await?;
//!
//!     // Append a record; the store stamps the timestamp
//!     let record = store
//!         .append(NewScoreRecord::new("U1234", -0.4, vec!["緊張".to_string()]))
//!         .await?;
//!     println!("stored at {}", record.created_at);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use models::{NewScoreRecord, ScoreRecord};
pub use store::ScoreStore;

use async_trait::async_trait;
use emotion_core::DateWindow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// SQLite-backed score store.
#[derive(Debug, Clone)]
pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    /// Default pool size. Sized for concurrent event processing within a
    /// webhook batch.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist, or
    /// `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to score store: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// Call once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running score store migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ScoreStore for SqliteScoreStore {
    async fn append(&self, new_record: NewScoreRecord) -> Result<ScoreRecord> {
        record::append(&self.pool, &new_record).await
    }

    async fn query(&self, user_id: &str, window: &DateWindow) -> Result<Vec<ScoreRecord>> {
        record::records_in_window(&self.pool, user_id, window).await
    }
}
