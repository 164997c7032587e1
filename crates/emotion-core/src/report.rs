//! Rendered report and published image types.

/// A rendered emotion radar report, as returned by the radar service.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarReport {
    /// Human-readable KPI summary text.
    pub kpi_text: String,
    /// PNG chart, base64-encoded.
    pub image_base64: String,
}

/// A published image reference, ready to embed in a reply.
///
/// The observable output of an [`ImagePublisher`](crate::ImagePublisher)
/// strategy: either a data URI or a publicly fetchable URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageLink {
    /// Full-size image reference.
    pub original: String,
    /// Preview image reference.
    pub preview: String,
}

impl ImageLink {
    /// An image link that uses the same reference for full and preview.
    pub fn same(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            preview: reference.clone(),
            original: reference,
        }
    }
}
