//! Time-windowed aggregation over stored score records.

use emotion_core::{DateWindow, EmotionCategory, EmotionProfile};
use score_store::{ScoreRecord, ScoreStore};
use tracing::debug;

use crate::error::PipelineError;

/// Fold a record set into an averaged [`EmotionProfile`].
///
/// For every record with a non-empty keyword list, the record's score is
/// added to each category its keywords name, and one shared contribution
/// counter is incremented once per such record. The counter increments even
/// when none of the record's keywords match a configured category; that
/// dilutes the average and is preserved as documented current behavior.
/// Unknown keywords are ignored, never an error.
pub fn fold_records(records: &[ScoreRecord]) -> EmotionProfile {
    let mut totals = EmotionProfile::zero();
    let mut contributors: u32 = 0;

    for record in records {
        if record.keywords.is_empty() {
            continue;
        }
        for keyword in &record.keywords {
            if let Some(category) = EmotionCategory::from_keyword(keyword) {
                totals.add(category, record.score);
            }
        }
        contributors += 1;
    }

    totals.averaged(contributors)
}

/// Compute a user's emotion profile over a date window.
///
/// Pure read-and-compute: queries the store and folds the result. Never
/// mutates the store, so identical inputs over an unchanged store yield an
/// identical profile.
pub async fn aggregate(
    store: &dyn ScoreStore,
    user_id: &str,
    window: &DateWindow,
) -> Result<EmotionProfile, PipelineError> {
    let records = store.query(user_id, window).await?;
    debug!(
        user_id,
        window = %window,
        records = records.len(),
        "aggregating score records"
    );
    Ok(fold_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: f64, keywords: &[&str]) -> ScoreRecord {
        ScoreRecord {
            id: 0,
            user_id: "user-1".to_string(),
            score,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            created_at: "2025-07-12T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_window_yields_all_zero_profile() {
        let profile = fold_records(&[]);
        assert!(profile.is_zero());
    }

    #[test]
    fn records_without_keywords_do_not_contribute() {
        let records = vec![record(0.9, &[]), record(-0.9, &[])];
        let profile = fold_records(&records);
        assert!(profile.is_zero());
    }

    #[test]
    fn two_records_average_per_category() {
        // One tension record at 0.6, one fear record at 0.2; count = 2.
        let records = vec![record(0.6, &["緊張"]), record(0.2, &["害怕"])];
        let profile = fold_records(&records);

        assert_eq!(profile.get(EmotionCategory::Tension), 0.3);
        assert_eq!(profile.get(EmotionCategory::Fear), 0.1);
        assert_eq!(profile.get(EmotionCategory::Unease), 0.0);
        assert_eq!(profile.get(EmotionCategory::Nervousness), 0.0);
        assert_eq!(profile.get(EmotionCategory::Impatience), 0.0);
        assert_eq!(profile.get(EmotionCategory::Frustration), 0.0);
    }

    #[test]
    fn unmatched_keywords_still_count_as_contributors() {
        // The second record's keyword names no configured category, so it
        // adds nothing to any total but still dilutes the average.
        let records = vec![record(0.6, &["緊張"]), record(0.8, &["開心"])];
        let profile = fold_records(&records);

        assert_eq!(profile.get(EmotionCategory::Tension), 0.3);
        assert_eq!(profile.get(EmotionCategory::Fear), 0.0);
    }

    #[test]
    fn record_with_multiple_keywords_counts_once() {
        let records = vec![record(0.4, &["緊張", "害怕"]), record(0.2, &["緊張"])];
        let profile = fold_records(&records);

        // Tension total 0.6 over 2 contributors, fear total 0.4 over 2.
        assert_eq!(profile.get(EmotionCategory::Tension), 0.3);
        assert_eq!(profile.get(EmotionCategory::Fear), 0.2);
    }

    #[test]
    fn averages_round_to_three_decimals() {
        let records = vec![
            record(0.1, &["不安"]),
            record(0.1, &["不安"]),
            record(0.1, &["不安"]),
        ];
        let profile = fold_records(&records);
        assert_eq!(profile.get(EmotionCategory::Unease), 0.1);

        let records = vec![
            record(1.0, &["不安"]),
            record(0.0, &["不安"]),
            record(0.0, &["不安"]),
        ];
        let profile = fold_records(&records);
        assert_eq!(profile.get(EmotionCategory::Unease), 0.333);
    }

    #[test]
    fn folding_is_deterministic() {
        let records = vec![record(0.6, &["緊張"]), record(0.2, &["害怕"])];
        assert_eq!(fold_records(&records), fold_records(&records));
    }
}
