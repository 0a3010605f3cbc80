//! Detection record and derived analytics types.

use crate::constants::HOURS_PER_DAY;
use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp::parse_timestamp;

/// One logged bird-call observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Species display name (free-form, not a controlled vocabulary).
    pub species: String,
    /// ISO-8601 timestamp as written in the log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Detection confidence, consumed as given.
    pub confidence: f64,
    /// Name of the associated audio clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    /// Recording location, if the station logged one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Station coordinates attached to a detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl DetectionRecord {
    /// Create a record with the three core fields.
    pub fn new(species: impl Into<String>, timestamp: impl Into<String>, confidence: f64) -> Self {
        Self {
            species: species.into(),
            timestamp: Some(timestamp.into()),
            confidence,
            audio_file: None,
            location: None,
        }
    }

    /// Attach the name of the audio clip.
    #[must_use]
    pub fn with_audio_file(mut self, audio_file: impl Into<String>) -> Self {
        self.audio_file = Some(audio_file.into());
        self
    }

    /// Parse the record timestamp into station-local time.
    ///
    /// A missing timestamp is reported as a parse failure.
    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime> {
        let raw = self.timestamp.as_deref().ok_or_else(|| {
            Error::parse(
                format!("detection of '{}'", self.species),
                "record has no timestamp",
            )
        })?;
        parse_timestamp(raw)
    }
}

/// Confidence summary over a record collection.
///
/// All fields are `0.0` for an empty collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceStats {
    /// Lowest confidence.
    pub min: f64,
    /// Highest confidence.
    pub max: f64,
    /// Arithmetic mean confidence.
    pub average: f64,
}

/// Number of detections for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCount {
    /// Species label.
    pub species: String,
    /// Number of detections.
    pub count: usize,
}

/// Detection counts per hour of day, index 0 is midnight.
pub type HourlyActivity = [usize; HOURS_PER_DAY];
