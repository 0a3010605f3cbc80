//! Result types returned by the query façade.

use crate::analytics::{ConfidenceStats, DetectionRecord, HourlyActivity};
use serde::{Deserialize, Serialize};

/// Detections in a date range, with their confidence summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionQueryResult {
    /// Matching detections, in log order.
    pub detections: Vec<DetectionRecord>,
    /// Confidence summary over `detections`.
    pub stats: ConfidenceStats,
    /// Number of matching detections.
    pub total: usize,
}

/// Activity pattern for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    /// Date as requested.
    pub date: String,
    /// Species filter applied, or `"all"`.
    pub species: String,
    /// Detections on that day.
    pub total_detections: usize,
    /// Detections per hour of day.
    pub hourly_activity: HourlyActivity,
    /// Busiest hour, earliest on ties.
    pub peak_hour: usize,
    /// Distinct species labels on that day.
    pub unique_species: usize,
}
