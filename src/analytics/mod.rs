//! Detection analytics.
//!
//! Pure, synchronous computations over an in-memory collection of detection
//! records: filtering, confidence statistics, species ranking and hourly
//! activity. Nothing here performs I/O or keeps state between calls.

mod aggregate;
mod filter;
mod period;
mod stats;
mod timestamp;
mod types;

pub use aggregate::{hourly_activity, peak_hour, species_counts, species_ranking, unique_species};
pub use filter::{filter_by_calendar_date, filter_by_date_range, filter_by_species};
pub use period::{Clock, FixedClock, Period, PeriodStatistics, SystemClock, period_statistics};
pub use stats::calculate_confidence_stats;
pub use timestamp::{parse_date, parse_timestamp};
pub use types::{ConfidenceStats, DetectionRecord, HourlyActivity, Location, SpeciesCount};
