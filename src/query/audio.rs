//! Audio clip encoding.

use crate::error::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// How audio bytes are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// Standard base64 text.
    #[default]
    Base64,
    /// Raw bytes.
    Buffer,
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::Buffer => write!(f, "buffer"),
        }
    }
}

impl std::str::FromStr for AudioFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base64" => Ok(Self::Base64),
            "buffer" => Ok(Self::Buffer),
            other => Err(Error::InvalidArgument {
                name: "audio format",
                value: other.to_string(),
                expected: "base64 or buffer",
            }),
        }
    }
}

/// An audio clip in the requested encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "audio", rename_all = "lowercase")]
pub enum AudioRecording {
    /// Base64-encoded clip.
    Base64(String),
    /// Raw clip bytes.
    Buffer(Vec<u8>),
}

impl AudioRecording {
    /// Encode raw clip bytes in `format`.
    pub fn encode(bytes: Vec<u8>, format: AudioFormat) -> Self {
        match format {
            AudioFormat::Base64 => Self::Base64(STANDARD.encode(&bytes)),
            AudioFormat::Buffer => Self::Buffer(bytes),
        }
    }

    /// Encoding of this clip.
    pub fn format(&self) -> AudioFormat {
        match self {
            Self::Base64(_) => AudioFormat::Base64,
            Self::Buffer(_) => AudioFormat::Buffer,
        }
    }

    /// Recover the raw clip bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if base64 text is not valid.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Self::Base64(text) => STANDARD
                .decode(text.as_bytes())
                .map_err(|e| Error::parse("base64 audio", e.to_string())),
            Self::Buffer(bytes) => Ok(bytes),
        }
    }
}

/// Reject clip names that could escape the audio directory.
///
/// Names may contain subdirectories but no root, prefix, `.` or `..`
/// components.
pub fn validate_clip_name(filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let plain = !filename.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

    if plain {
        Ok(())
    } else {
        Err(Error::InvalidArgument {
            name: "filename",
            value: filename.to_string(),
            expected: "a relative clip name without '.' or '..' components",
        })
    }
}
