//! Outbound reply composition.

use emotion_core::{CareMessageSource, DateWindow, ImageLink, Sentiment};
use tracing::warn;

use crate::sender::ReplyPart;

/// Positive-affect message, appended when the score exceeds the positive
/// threshold.
pub const POSITIVE_REPLY: &str = "聽起來你今天心情不錯 😊";

/// Neutral-affect message for scores between the thresholds.
pub const NEUTRAL_REPLY: &str = "你的心情還好～";

/// Fixed caring message substituted when the generator fails.
pub const DEFAULT_CARING_MESSAGE: &str = "請記得好好照顧自己 ❤️";

/// Failure notice sent when the radar chart could not be produced.
pub const RADAR_FAILURE_REPLY: &str = "抱歉，心情雷達圖生成失敗 😢";

/// Scores above this are treated as positive affect.
pub const POSITIVE_THRESHOLD: f64 = 0.3;

/// Scores below this trigger the caring-message generator.
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Format a score for display, always with exactly 3 decimal places.
pub fn format_score(score: f64) -> String {
    format!("{:.3}", score)
}

/// Compose the single text reply for the scoring pipeline.
///
/// The reply opens with the formatted score. Negative scores get a caring
/// message from the generator, or [`DEFAULT_CARING_MESSAGE`] when the
/// generator fails.
pub async fn scoring_reply(
    text: &str,
    sentiment: &Sentiment,
    care: &dyn CareMessageSource,
) -> ReplyPart {
    let mut reply = format!("情緒分數：{}\n", format_score(sentiment.score));

    if sentiment.score > POSITIVE_THRESHOLD {
        reply.push_str(POSITIVE_REPLY);
    } else if sentiment.score < NEGATIVE_THRESHOLD {
        match care.caring_message(text, &sentiment.keywords).await {
            Ok(message) => reply.push_str(&message),
            Err(e) => {
                warn!(error = %e, "caring message generation failed, using default");
                reply.push_str(DEFAULT_CARING_MESSAGE);
            }
        }
    } else {
        reply.push_str(NEUTRAL_REPLY);
    }

    ReplyPart::Text { text: reply }
}

/// Compose the two-part reply for a successful aggregation: the window
/// summary with the report's KPI text, then the published chart image.
pub fn radar_reply(window: &DateWindow, kpi_text: &str, image: &ImageLink) -> Vec<ReplyPart> {
    vec![
        ReplyPart::Text {
            text: format!("📌 這是你 {} 的心情狀態雷達圖與指標：\n\n{}", window, kpi_text),
        },
        ReplyPart::Image {
            original_url: image.original.clone(),
            preview_url: image.preview.clone(),
        },
    ]
}

/// Compose the single-part fallback reply when the radar chart could not be
/// rendered or published. No image part is produced.
pub fn radar_failure_reply() -> Vec<ReplyPart> {
    vec![ReplyPart::text(RADAR_FAILURE_REPLY)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use emotion_core::{async_trait, ServiceError};

    struct FixedCare(&'static str);

    #[async_trait]
    impl CareMessageSource for FixedCare {
        async fn caring_message(
            &self,
            _text: &str,
            _keywords: &[String],
        ) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct UnreachableCare;

    #[async_trait]
    impl CareMessageSource for UnreachableCare {
        async fn caring_message(
            &self,
            _text: &str,
            _keywords: &[String],
        ) -> Result<String, ServiceError> {
            Err(ServiceError::Network("connection refused".to_string()))
        }
    }

    fn reply_text(part: &ReplyPart) -> &str {
        match part {
            ReplyPart::Text { text } => text,
            ReplyPart::Image { .. } => panic!("expected text part"),
        }
    }

    #[test]
    fn format_score_always_has_three_decimals() {
        assert_eq!(format_score(0.5), "0.500");
        assert_eq!(format_score(-0.4), "-0.400");
        assert_eq!(format_score(0.0), "0.000");
        assert_eq!(format_score(1.2345), "1.234");

        let pattern = |s: &str| {
            let s = s.strip_prefix('-').unwrap_or(s);
            let (int, frac) = s.split_once('.').unwrap();
            !int.is_empty() && int.chars().all(|c| c.is_ascii_digit()) && frac.len() == 3
        };
        for score in [0.5, -0.4, 0.0, 12.3, -1.0] {
            assert!(pattern(&format_score(score)), "bad format for {}", score);
        }
    }

    #[tokio::test]
    async fn positive_score_gets_positive_message() {
        let sentiment = Sentiment::new(0.5, vec![]);
        let part = scoring_reply("好開心", &sentiment, &FixedCare("unused")).await;

        let text = reply_text(&part);
        assert!(text.starts_with("情緒分數：0.500\n"));
        assert!(text.ends_with(POSITIVE_REPLY));
    }

    #[tokio::test]
    async fn negative_score_includes_caring_message() {
        let sentiment = Sentiment::new(-0.4, vec!["挫敗感".to_string()]);
        let part = scoring_reply("好累", &sentiment, &FixedCare("辛苦了")).await;

        let text = reply_text(&part);
        assert!(text.starts_with("情緒分數：-0.400\n"));
        assert!(text.ends_with("辛苦了"));
    }

    #[tokio::test]
    async fn negative_score_with_unreachable_generator_uses_default() {
        let sentiment = Sentiment::new(-0.4, vec!["挫敗感".to_string()]);
        let part = scoring_reply("好累", &sentiment, &UnreachableCare).await;

        let text = reply_text(&part);
        assert!(text.starts_with("情緒分數：-0.400\n"));
        assert!(text.ends_with(DEFAULT_CARING_MESSAGE));
    }

    #[tokio::test]
    async fn scores_within_thresholds_are_neutral() {
        for score in [0.3, -0.3, 0.0] {
            let sentiment = Sentiment::new(score, vec![]);
            let part = scoring_reply("還好", &sentiment, &UnreachableCare).await;
            assert!(reply_text(&part).ends_with(NEUTRAL_REPLY));
        }
    }

    #[test]
    fn radar_reply_is_text_then_image() {
        let window = DateWindow::new(
            "2025-07-10".parse().unwrap(),
            "2025-07-15".parse().unwrap(),
        );
        let image = ImageLink::same("data:image/png;base64,aGk=");
        let parts = radar_reply(&window, "- 緊張：0.60", &image);

        assert_eq!(parts.len(), 2);
        let text = reply_text(&parts[0]);
        assert!(text.contains("2025-07-10～2025-07-15"));
        assert!(text.contains("- 緊張：0.60"));
        assert_eq!(
            parts[1],
            ReplyPart::Image {
                original_url: "data:image/png;base64,aGk=".to_string(),
                preview_url: "data:image/png;base64,aGk=".to_string(),
            }
        );
    }

    #[test]
    fn radar_failure_is_single_text_part() {
        let parts = radar_failure_reply();
        assert_eq!(parts, vec![ReplyPart::text(RADAR_FAILURE_REPLY)]);
    }
}
