//! Store models.

use serde::{Deserialize, Serialize};

/// A persisted sentiment measurement for one message.
///
/// Immutable once created; never updated or deleted. Records accumulate
/// indefinitely per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Store-assigned row id.
    pub id: i64,
    /// Opaque stable identifier of the sender.
    pub user_id: String,
    /// Signed sentiment value.
    pub score: f64,
    /// Detected emotion keywords, possibly empty.
    pub keywords: Vec<String>,
    /// Creation timestamp, RFC 3339 UTC, stamped by the store at write
    /// time. Never client-supplied.
    pub created_at: String,
}

/// The client-supplied fields of a record to append.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScoreRecord {
    pub user_id: String,
    pub score: f64,
    pub keywords: Vec<String>,
}

impl NewScoreRecord {
    pub fn new(user_id: impl Into<String>, score: f64, keywords: Vec<String>) -> Self {
        Self {
            user_id: user_id.into(),
            score,
            keywords,
        }
    }
}
