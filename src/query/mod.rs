//! Query façade over a record store.
//!
//! [`DetectionEngine`] exposes the five user-facing operations. Each call
//! reads the full record collection from the store once and derives its
//! result from that snapshot; nothing is cached between calls.

mod audio;
mod report;
mod types;

pub use audio::{AudioFormat, AudioRecording, validate_clip_name};
pub use report::{
    DetectionReport, ReportBody, ReportData, ReportFormat, ReportPeriod, render_html,
    render_markdown,
};
pub use types::{DailyActivity, DetectionQueryResult};

use crate::analytics::{
    Clock, DetectionRecord, Period, PeriodStatistics, SystemClock, calculate_confidence_stats,
    filter_by_calendar_date, filter_by_date_range, filter_by_species, hourly_activity, parse_date,
    peak_hour, period_statistics, unique_species,
};
use crate::constants::ALL_SPECIES;
use crate::error::Result;
use crate::store::RecordStore;
use tracing::debug;

/// Detection analytics over a [`RecordStore`].
#[derive(Debug, Clone)]
pub struct DetectionEngine<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: RecordStore> DetectionEngine<S> {
    /// Create an engine using the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> DetectionEngine<S, C> {
    /// Create an engine with an explicit clock.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// The underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Detections between `start_date` and `end_date` (inclusive), optionally
    /// narrowed by a species substring.
    pub async fn get_bird_detections(
        &self,
        start_date: &str,
        end_date: &str,
        species: Option<&str>,
    ) -> Result<DetectionQueryResult> {
        let records = self.store.read_all_records().await?;
        query_range(&records, start_date, end_date, species)
    }

    /// Statistics over `period` for detections with at least
    /// `min_confidence`.
    pub async fn get_detection_stats(
        &self,
        period: Period,
        min_confidence: f64,
    ) -> Result<PeriodStatistics> {
        let records = self.store.read_all_records().await?;
        let stats = period_statistics(&records, period, min_confidence, self.clock.now())?;
        debug!(
            "Period '{period}' (min confidence {min_confidence}) selected {} of {} detection(s)",
            stats.total_detections,
            records.len()
        );
        Ok(stats)
    }

    /// Hourly activity on the calendar day of `date`, optionally narrowed by
    /// a species substring.
    pub async fn get_daily_activity(
        &self,
        date: &str,
        species: Option<&str>,
    ) -> Result<DailyActivity> {
        let target = parse_date(date)?;
        let species = non_empty(species);
        let records = self.store.read_all_records().await?;

        let mut day = filter_by_calendar_date(&records, target)?;
        if let Some(species) = species {
            day = filter_by_species(day, species);
        }

        let activity = hourly_activity(day.iter().copied())?;
        debug!("{} detection(s) on {target}", day.len());

        Ok(DailyActivity {
            date: date.to_string(),
            species: species.unwrap_or(ALL_SPECIES).to_string(),
            total_detections: day.len(),
            hourly_activity: activity,
            peak_hour: peak_hour(&activity),
            unique_species: unique_species(day.iter().copied()),
        })
    }

    /// Read the named clip and encode it in `format`.
    pub async fn get_audio_recording(
        &self,
        filename: &str,
        format: AudioFormat,
    ) -> Result<AudioRecording> {
        validate_clip_name(filename)?;
        let bytes = self.store.read_audio_bytes(filename).await?;
        Ok(AudioRecording::encode(bytes, format))
    }

    /// Build a report from the detections between `start_date` and
    /// `end_date` and the all-time statistics.
    pub async fn generate_detection_report(
        &self,
        start_date: &str,
        end_date: &str,
        format: ReportFormat,
    ) -> Result<DetectionReport> {
        let records = self.store.read_all_records().await?;

        let detections = query_range(&records, start_date, end_date, None)?;
        let summary = period_statistics(&records, Period::All, 0.0, self.clock.now())?;

        let data = ReportData {
            period: ReportPeriod {
                start: start_date.to_string(),
                end: end_date.to_string(),
            },
            summary,
            detections,
        };

        Ok(DetectionReport::render(data, format))
    }
}

/// Treat an empty species query as no query.
fn non_empty(species: Option<&str>) -> Option<&str> {
    species.filter(|s| !s.is_empty())
}

fn query_range(
    records: &[DetectionRecord],
    start_date: &str,
    end_date: &str,
    species: Option<&str>,
) -> Result<DetectionQueryResult> {
    let mut selected = filter_by_date_range(records, start_date, end_date)?;
    if let Some(species) = non_empty(species) {
        selected = filter_by_species(selected, species);
    }

    debug!(
        "Range {start_date}..={end_date} matched {} of {} detection(s)",
        selected.len(),
        records.len()
    );

    let stats = calculate_confidence_stats(selected.iter().copied());
    let detections: Vec<DetectionRecord> = selected.into_iter().cloned().collect();

    Ok(DetectionQueryResult {
        total: detections.len(),
        detections,
        stats,
    })
}
