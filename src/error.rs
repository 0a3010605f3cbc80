//! Error types for birdnet-insights.

/// Result type alias for birdnet-insights operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for birdnet-insights.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date, time, or record timestamp could not be parsed.
    #[error("failed to parse '{input}': {reason}")]
    Parse {
        /// The offending input text.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// An argument was outside its closed set of accepted values.
    #[error("invalid {name} '{value}' (expected {expected})")]
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
        /// Value that was supplied.
        value: String,
        /// Human-readable list of accepted values.
        expected: &'static str,
    },

    /// Requested audio clip does not exist.
    #[error("audio file not found: {filename}")]
    AudioNotFound {
        /// Name of the missing clip.
        filename: String,
    },

    /// Failed to read an audio clip that exists.
    #[error("failed to read audio file '{path}'")]
    AudioRead {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the detection log.
    #[error("failed to read detection log '{path}'")]
    DetectionLogRead {
        /// Path to the detection log.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Detection log content is malformed.
    #[error("failed to parse detection log '{path}'")]
    DetectionLogParse {
        /// Path to the detection log.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to serialize a result as JSON.
    #[error("failed to serialize JSON output")]
    JsonSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::Parse`] for the given input.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
