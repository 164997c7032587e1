//! Store interface over the persistence boundary.

use async_trait::async_trait;
use emotion_core::DateWindow;

use crate::error::Result;
use crate::models::{NewScoreRecord, ScoreRecord};

/// Durable keyed-append store for per-message sentiment records.
///
/// Append-only from the pipeline's perspective: no update or delete
/// operation is exposed, so concurrent writers never conflict on update
/// semantics. Injected into the pipeline so tests can substitute fakes.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Durably persist one record, stamping its server-side timestamp.
    async fn append(&self, record: NewScoreRecord) -> Result<ScoreRecord>;

    /// All records for `user_id` with a timestamp inside `window`
    /// (inclusive bounds; the end boundary absorbs the full end day).
    /// Order is unspecified.
    async fn query(&self, user_id: &str, window: &DateWindow) -> Result<Vec<ScoreRecord>>;
}
