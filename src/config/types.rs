//! Configuration type definitions.

use crate::constants::{
    DEFAULT_AUDIO_DIR, DEFAULT_DATA_DIR, DEFAULT_DETECTION_FILE, DEFAULT_MIN_CONFIDENCE,
};
use crate::query::{AudioFormat, ReportFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where detection data lives.
    #[serde(default)]
    pub store: StoreConfig,

    /// Default query settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Locations of the detection log and audio clips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory containing the detection log.
    pub data_dir: PathBuf,

    /// Directory containing audio clips.
    pub audio_dir: PathBuf,

    /// Detection log file name inside `data_dir` (`.json` or `.csv`).
    pub detection_file: String,
}

impl StoreConfig {
    /// Full path of the detection log.
    pub fn detection_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.detection_file)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            audio_dir: PathBuf::from(DEFAULT_AUDIO_DIR),
            detection_file: DEFAULT_DETECTION_FILE.to_string(),
        }
    }
}

/// Default query settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Minimum confidence for period statistics.
    pub min_confidence: f64,

    /// Report format when none is given.
    pub report_format: ReportFormat,

    /// Audio encoding when none is given.
    pub audio_format: AudioFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            report_format: ReportFormat::default(),
            audio_format: AudioFormat::default(),
        }
    }
}
