//! File-system backed record store.

use super::RecordStore;
use super::log::{LogFormat, parse_csv_log, parse_json_log};
use crate::analytics::DetectionRecord;
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Record store reading a detection log and an audio directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    detection_log: PathBuf,
    audio_dir: PathBuf,
}

impl FileStore {
    /// Create a store for an explicit log path and audio directory.
    pub fn new(detection_log: impl Into<PathBuf>, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            detection_log: detection_log.into(),
            audio_dir: audio_dir.into(),
        }
    }

    /// Create a store from resolved store settings.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.detection_log_path(), &config.audio_dir)
    }

    /// Path of the detection log.
    pub fn detection_log(&self) -> &Path {
        &self.detection_log
    }

    /// Directory holding audio clips.
    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }
}

impl RecordStore for FileStore {
    async fn read_all_records(&self) -> Result<Vec<DetectionRecord>> {
        let path = &self.detection_log;

        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Detection log not found, treating as empty: {}",
                    path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(Error::DetectionLogRead {
                    path: path.clone(),
                    source: e,
                });
            }
        };

        let records = match LogFormat::from_path(path) {
            LogFormat::Json => parse_json_log(path, &contents)?,
            LogFormat::Csv => parse_csv_log(path, &contents)?,
        };

        debug!("Loaded {} detection(s) from {}", records.len(), path.display());
        Ok(records)
    }

    async fn read_audio_bytes(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.audio_dir.join(filename);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!("Read {} byte(s) from {}", bytes.len(), path.display());
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::AudioNotFound {
                filename: filename.to_string(),
            }),
            Err(e) => Err(Error::AudioRead { path, source: e }),
        }
    }
}
