//! Confidence statistics.

use super::{ConfidenceStats, DetectionRecord};

/// Compute min, max and mean confidence over `records`.
///
/// An empty collection yields the all-zero sentinel rather than an error.
pub fn calculate_confidence_stats<'a, I>(records: I) -> ConfidenceStats
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut count = 0_usize;
    let mut sum = 0.0_f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for record in records {
        count += 1;
        sum += record.confidence;
        min = min.min(record.confidence);
        max = max.max(record.confidence);
    }

    if count == 0 {
        return ConfidenceStats::default();
    }

    #[allow(clippy::cast_precision_loss)]
    let average = sum / count as f64;

    ConfidenceStats { min, max, average }
}
