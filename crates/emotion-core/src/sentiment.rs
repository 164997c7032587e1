//! Single-message classifier result.

/// Sentiment score and detected emotion keywords for one message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sentiment {
    /// Signed sentiment value, conventionally in [-1, 1] but not clamped
    /// by this layer.
    pub score: f64,
    /// Detected emotion keywords, possibly empty. Keywords outside the
    /// configured category set are kept here and ignored at aggregation.
    pub keywords: Vec<String>,
}

impl Sentiment {
    /// The neutral default substituted when classification fails.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Create a sentiment result.
    pub fn new(score: f64, keywords: Vec<String>) -> Self {
        Self { score, keywords }
    }
}
