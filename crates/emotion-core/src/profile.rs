//! The closed emotion-category set and the aggregated profile.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The fixed set of tracked emotion categories.
///
/// The labels double as the classifier's keyword vocabulary and as the keys
/// of the radar renderer's `emotionScores` object. Keywords outside this set
/// are ignored during aggregation by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionCategory {
    Tension,
    Fear,
    Unease,
    Nervousness,
    Impatience,
    Frustration,
}

impl EmotionCategory {
    /// All categories, in radar-axis order.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Tension,
        EmotionCategory::Fear,
        EmotionCategory::Unease,
        EmotionCategory::Nervousness,
        EmotionCategory::Impatience,
        EmotionCategory::Frustration,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// The platform-language label used on the wire and in keywords.
    pub fn label(self) -> &'static str {
        match self {
            EmotionCategory::Tension => "緊張",
            EmotionCategory::Fear => "害怕",
            EmotionCategory::Unease => "不安",
            EmotionCategory::Nervousness => "神經質",
            EmotionCategory::Impatience => "不耐煩",
            EmotionCategory::Frustration => "挫敗感",
        }
    }

    /// Map a classifier keyword to a category.
    ///
    /// Returns `None` for keywords outside the configured set.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == keyword)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Round a score to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Averaged per-category sentiment scores over a time window.
///
/// Transient aggregation result; never persisted. Serializes as a JSON
/// object keyed by category label, the shape the radar renderer expects.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EmotionProfile {
    scores: [f64; EmotionCategory::COUNT],
}

impl EmotionProfile {
    /// An all-zero profile.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Score for one category.
    pub fn get(&self, category: EmotionCategory) -> f64 {
        self.scores[category.index()]
    }

    /// Add to one category's running total.
    pub fn add(&mut self, category: EmotionCategory, score: f64) {
        self.scores[category.index()] += score;
    }

    /// Divide every category total by the contribution count and round each
    /// average to 3 decimals. A count of zero leaves the profile untouched.
    pub fn averaged(mut self, contributors: u32) -> Self {
        if contributors == 0 {
            return self;
        }
        for value in &mut self.scores {
            *value = round3(*value / f64::from(contributors));
        }
        self
    }

    /// True when every category is zero.
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|v| *v == 0.0)
    }
}

impl Serialize for EmotionProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(EmotionCategory::COUNT))?;
        for category in EmotionCategory::ALL {
            map.serialize_entry(category.label(), &self.get(category))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_mapping_covers_all_labels() {
        for category in EmotionCategory::ALL {
            assert_eq!(EmotionCategory::from_keyword(category.label()), Some(category));
        }
    }

    #[test]
    fn unknown_keyword_maps_to_none() {
        assert_eq!(EmotionCategory::from_keyword("開心"), None);
        assert_eq!(EmotionCategory::from_keyword(""), None);
    }

    #[test]
    fn averaged_rounds_to_three_decimals() {
        let mut profile = EmotionProfile::zero();
        profile.add(EmotionCategory::Tension, 1.0);
        let averaged = profile.averaged(3);
        assert_eq!(averaged.get(EmotionCategory::Tension), 0.333);
        // Representable with exactly 3 decimal digits.
        let value = averaged.get(EmotionCategory::Tension);
        assert_eq!(round3(value), value);
    }

    #[test]
    fn averaged_with_zero_contributors_is_identity() {
        let mut profile = EmotionProfile::zero();
        profile.add(EmotionCategory::Fear, 0.7);
        assert_eq!(profile.averaged(0), profile);
    }

    #[test]
    fn serializes_as_label_keyed_map() {
        let mut profile = EmotionProfile::zero();
        profile.add(EmotionCategory::Tension, 0.6);
        let json = serde_json::to_value(profile).unwrap();
        assert_eq!(json["緊張"], 0.6);
        assert_eq!(json["害怕"], 0.0);
        assert_eq!(json.as_object().unwrap().len(), EmotionCategory::COUNT);
    }
}
