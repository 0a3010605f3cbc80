//! JSON envelope types for CLI output.
//!
//! Every command prints exactly one envelope on stdout so that the CLI can
//! back scripts and web frontends without scraping log text.

use crate::constants::ENVELOPE_SPEC_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON envelope wrapping a command result.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: String,
    /// Time the result was produced.
    pub timestamp: DateTime<Utc>,
    /// Operation that produced the payload.
    pub operation: Operation,
    /// Operation-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope with the current timestamp.
    pub fn new(operation: Operation, payload: T) -> Self {
        Self {
            spec_version: ENVELOPE_SPEC_VERSION.to_string(),
            timestamp: Utc::now(),
            operation,
            payload,
        }
    }
}

/// Operation discriminator for envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Date-range detection query.
    BirdDetections,
    /// Period statistics.
    DetectionStats,
    /// Hourly activity for one day.
    DailyActivity,
    /// Audio clip retrieval.
    AudioRecording,
    /// Detection report.
    DetectionReport,
    /// Configuration display.
    Config,
}

/// Payload for `audio --format buffer`, where the bytes go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSavedPayload {
    /// Requested clip name.
    pub filename: String,
    /// File the raw bytes were written to.
    pub output_file: PathBuf,
    /// Number of bytes written.
    pub bytes: usize,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let payload = AudioSavedPayload {
            filename: "robin1.wav".to_string(),
            output_file: PathBuf::from("/tmp/robin1.wav"),
            bytes: 42,
        };
        let envelope = JsonEnvelope::new(Operation::AudioRecording, payload);

        let json = serde_json::to_string(&envelope).expect("serialize");
        assert!(json.contains("\"spec_version\":\"1.0\""));
        assert!(json.contains("\"operation\":\"audio_recording\""));
        assert!(json.contains("\"bytes\":42"));
    }

    #[test]
    fn test_operation_serialization() {
        assert_eq!(
            serde_json::to_string(&Operation::BirdDetections).expect("serialize"),
            "\"bird_detections\""
        );
        assert_eq!(
            serde_json::to_string(&Operation::DailyActivity).expect("serialize"),
            "\"daily_activity\""
        );
    }
}
