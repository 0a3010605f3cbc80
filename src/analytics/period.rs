//! Statistics over relative time windows.

use super::aggregate::{species_counts, species_ranking, unique_species};
use super::stats::calculate_confidence_stats;
use super::{ConfidenceStats, DetectionRecord, SpeciesCount};
use crate::constants::period::{DAY_HOURS, MONTH_DAYS, WEEK_DAYS};
use crate::error::{Error, Result};
use chrono::{Local, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Source of the current station-local time.
pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Named relative time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    Week,
    /// Last 30 days.
    Month,
    /// No time restriction.
    All,
}

impl Period {
    /// Width of the window, or `None` for [`Period::All`].
    pub fn window(self) -> Option<TimeDelta> {
        match self {
            Self::Day => Some(TimeDelta::hours(DAY_HOURS)),
            Self::Week => Some(TimeDelta::days(WEEK_DAYS)),
            Self::Month => Some(TimeDelta::days(MONTH_DAYS)),
            Self::All => None,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
            Self::Month => write!(f, "month"),
            Self::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            other => Err(Error::InvalidArgument {
                name: "period",
                value: other.to_string(),
                expected: "day, week, month or all",
            }),
        }
    }
}

/// Aggregate statistics for one period query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatistics {
    /// Number of detections passing both filters.
    pub total_detections: usize,
    /// Number of distinct species labels.
    pub unique_species: usize,
    /// Detection count for every species.
    pub detections_by_species: BTreeMap<String, usize>,
    /// Ten most detected species.
    pub top_species: Vec<SpeciesCount>,
    /// Confidence summary.
    pub confidence_stats: ConfidenceStats,
    /// Period the statistics cover.
    pub period_covered: Period,
    /// Confidence threshold applied.
    pub min_confidence: f64,
}

/// Compute statistics for records inside `period` with at least
/// `min_confidence`.
///
/// The window is measured back from `now`; a record qualifies when
/// `now - timestamp` does not exceed the window width. [`Period::All`] skips
/// the window and never parses timestamps.
///
/// # Errors
///
/// Returns [`Error::Parse`] if a windowed period meets a missing or malformed
/// record timestamp.
pub fn period_statistics(
    records: &[DetectionRecord],
    period: Period,
    min_confidence: f64,
    now: NaiveDateTime,
) -> Result<PeriodStatistics> {
    let window = period.window();

    let mut selected = Vec::new();
    for record in records {
        let within_period = match window {
            None => true,
            Some(width) => now - record.parsed_timestamp()? <= width,
        };
        if within_period && record.confidence >= min_confidence {
            selected.push(record);
        }
    }

    Ok(PeriodStatistics {
        total_detections: selected.len(),
        unique_species: unique_species(selected.iter().copied()),
        detections_by_species: species_counts(selected.iter().copied()),
        top_species: species_ranking(selected.iter().copied()),
        confidence_stats: calculate_confidence_stats(selected.iter().copied()),
        period_covered: period,
        min_confidence,
    })
}
