//! Date window for aggregation queries.

use std::fmt;

use chrono::NaiveDate;

/// An inclusive date range.
///
/// The store-query bounds are `[start 00:00:00, end 23:59:59]` UTC, so the
/// end boundary absorbs the full end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Create a window from inclusive start and end dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The window spanning `days` days and ending on `end`, inclusive.
    ///
    /// `last_days(d, 1)` is the single day `d`; `days == 0` is treated as 1.
    pub fn last_days(end: NaiveDate, days: u32) -> Self {
        let span = days.max(1) - 1;
        Self {
            start: end - chrono::Duration::days(i64::from(span)),
            end,
        }
    }

    /// Lower query bound, `start` at 00:00:00 UTC, in the store's
    /// timestamp format.
    pub fn start_bound(&self) -> String {
        format!("{}T00:00:00Z", self.start)
    }

    /// Upper query bound, `end` at 23:59:59 UTC, in the store's
    /// timestamp format.
    pub fn end_bound(&self) -> String {
        format!("{}T23:59:59Z", self.end)
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}～{}", self.start, self.end)
    }
}
