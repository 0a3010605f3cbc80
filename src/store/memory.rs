//! In-memory record store.

use super::RecordStore;
use crate::analytics::DetectionRecord;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Record store holding records and clips in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<DetectionRecord>,
    clips: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create a store serving `records` and no audio.
    pub fn new(records: Vec<DetectionRecord>) -> Self {
        Self {
            records,
            clips: HashMap::new(),
        }
    }

    /// Add an audio clip under `filename`.
    #[must_use]
    pub fn with_clip(mut self, filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.clips.insert(filename.into(), bytes.into());
        self
    }
}

impl RecordStore for MemoryStore {
    async fn read_all_records(&self) -> Result<Vec<DetectionRecord>> {
        Ok(self.records.clone())
    }

    async fn read_audio_bytes(&self, filename: &str) -> Result<Vec<u8>> {
        self.clips
            .get(filename)
            .cloned()
            .ok_or_else(|| Error::AudioNotFound {
                filename: filename.to_string(),
            })
    }
}
