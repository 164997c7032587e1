//! Score record operations.

use chrono::{SecondsFormat, Utc};
use emotion_core::DateWindow;
use sqlx::{FromRow, SqlitePool};

use crate::error::Result;
use crate::models::{NewScoreRecord, ScoreRecord};

/// Raw row shape; keywords are stored as a JSON text column.
#[derive(Debug, FromRow)]
struct ScoreRow {
    id: i64,
    user_id: String,
    score: f64,
    keywords: String,
    created_at: String,
}

impl ScoreRow {
    fn into_record(self) -> Result<ScoreRecord> {
        Ok(ScoreRecord {
            id: self.id,
            user_id: self.user_id,
            score: self.score,
            keywords: serde_json::from_str(&self.keywords)?,
            created_at: self.created_at,
        })
    }
}

/// Append one record, stamping the server-side timestamp.
pub async fn append(pool: &SqlitePool, record: &NewScoreRecord) -> Result<ScoreRecord> {
    // Seconds precision keeps stamps lexically comparable with the window
    // bounds produced by DateWindow.
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let keywords = serde_json::to_string(&record.keywords)?;

    let result = sqlx::query(
        r#"
        INSERT INTO score_records (user_id, score, keywords, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&record.user_id)
    .bind(record.score)
    .bind(&keywords)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(ScoreRecord {
        id: result.last_insert_rowid(),
        user_id: record.user_id.clone(),
        score: record.score,
        keywords: record.keywords.clone(),
        created_at,
    })
}

/// All records for a user whose timestamp falls inside the window.
///
/// No ordering guarantee; the aggregator does its own reduction.
pub async fn records_in_window(
    pool: &SqlitePool,
    user_id: &str,
    window: &DateWindow,
) -> Result<Vec<ScoreRecord>> {
    let rows = sqlx::query_as::<_, ScoreRow>(
        r#"
        SELECT id, user_id, score, keywords, created_at
        FROM score_records
        WHERE user_id = ? AND created_at >= ? AND created_at <= ?
        "#,
    )
    .bind(user_id)
    .bind(window.start_bound())
    .bind(window.end_bound())
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ScoreRow::into_record).collect()
}

/// Count all records for a user.
pub async fn count_for_user(pool: &SqlitePool, user_id: &str) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM score_records WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
