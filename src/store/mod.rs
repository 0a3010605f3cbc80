//! Read-only access to detection logs and audio clips.
//!
//! The analytics engine depends only on the two reads of [`RecordStore`], so
//! a file-system store and an in-memory fixture are interchangeable.

mod file;
mod log;
mod memory;

pub use file::FileStore;
pub use log::{LogFormat, parse_csv_log, parse_json_log};
pub use memory::MemoryStore;

use crate::analytics::DetectionRecord;
use crate::error::Result;
use std::future::Future;

/// Source of detection records and audio bytes.
pub trait RecordStore {
    /// Read every detection record.
    ///
    /// Returns an empty collection when the backing log does not exist.
    /// Malformed content is an error.
    fn read_all_records(&self) -> impl Future<Output = Result<Vec<DetectionRecord>>> + Send;

    /// Read the raw bytes of the named audio clip.
    ///
    /// Returns [`crate::Error::AudioNotFound`] when no such clip exists.
    fn read_audio_bytes(&self, filename: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
