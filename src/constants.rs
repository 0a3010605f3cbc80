//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "birdnet-insights";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default directory holding the detection log.
pub const DEFAULT_DATA_DIR: &str = "/var/www/birdnet/data";

/// Default directory holding recorded audio clips.
pub const DEFAULT_AUDIO_DIR: &str = "/var/www/birdnet/audio";

/// Default detection log file name, relative to the data directory.
pub const DEFAULT_DETECTION_FILE: &str = "detections.json";

/// Default minimum confidence for period statistics.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;

/// Maximum number of entries in a species ranking.
pub const TOP_SPECIES_LIMIT: usize = 10;

/// Number of hour buckets in an activity histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Species label reported when a query is not narrowed to a species.
pub const ALL_SPECIES: &str = "all";

/// Environment variables read by the CLI.
pub mod env {
    /// Overrides the data directory.
    pub const DATA_PATH: &str = "BIRDNET_DATA_PATH";
    /// Overrides the audio directory.
    pub const AUDIO_PATH: &str = "BIRDNET_AUDIO_PATH";
    /// Overrides the detection log file name.
    pub const DETECTION_FILE: &str = "BIRDNET_DETECTION_FILE";
    /// Names an explicit config file instead of the platform location.
    pub const CONFIG_FILE: &str = "BIRDNET_INSIGHTS_CONFIG";
}

/// Relative time windows used by period statistics.
pub mod period {
    /// Hours covered by the `day` period.
    pub const DAY_HOURS: i64 = 24;
    /// Days covered by the `week` period.
    pub const WEEK_DAYS: i64 = 7;
    /// Days covered by the `month` period (fixed width, not calendar aware).
    pub const MONTH_DAYS: i64 = 30;
}

/// Confidence threshold bounds accepted from configuration and the CLI.
pub mod confidence {
    /// Minimum valid confidence value.
    pub const MIN: f64 = 0.0;
    /// Maximum valid confidence value.
    pub const MAX: f64 = 1.0;
    /// Decimal places shown for percentages in rendered reports.
    pub const PERCENT_DECIMAL_PLACES: usize = 1;
}

/// JSON envelope format version.
pub const ENVELOPE_SPEC_VERSION: &str = "1.0";
