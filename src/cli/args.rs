//! CLI argument definitions.

use crate::constants::env;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Analytics and reports over BirdNET detection logs.
#[derive(Debug, Parser)]
#[command(name = "birdnet-insights")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Directory containing the detection log (overrides config).
    #[arg(long, global = true, env = env::DATA_PATH)]
    pub data_dir: Option<PathBuf>,

    /// Directory containing audio clips (overrides config).
    #[arg(long, global = true, env = env::AUDIO_PATH)]
    pub audio_dir: Option<PathBuf>,

    /// Detection log file name inside the data directory (overrides config).
    #[arg(long, global = true, env = env::DETECTION_FILE)]
    pub detection_file: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Queries over the detection log and audio directory.
    #[command(flatten)]
    Query(QueryCommand),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands answered by the detection engine.
#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// List detections in a date range.
    Detections {
        /// Range start (ISO-8601 date or date-time, inclusive).
        #[arg(long)]
        start: String,
        /// Range end (ISO-8601 date or date-time, inclusive).
        #[arg(long)]
        end: String,
        /// Only species whose name contains this text (case-insensitive).
        #[arg(short, long)]
        species: Option<String>,
    },
    /// Summarize detections over a recent period.
    Stats {
        /// Period: day, week, month or all.
        #[arg(short, long)]
        period: String,
        /// Minimum confidence threshold (0.0-1.0).
        #[arg(short = 'c', long, value_parser = parse_confidence)]
        min_confidence: Option<f64>,
    },
    /// Show hourly activity for one day.
    Activity {
        /// Day to analyze (ISO-8601 date).
        #[arg(long)]
        date: String,
        /// Only species whose name contains this text (case-insensitive).
        #[arg(short, long)]
        species: Option<String>,
    },
    /// Fetch an audio clip.
    Audio {
        /// Clip file name, relative to the audio directory.
        filename: String,
        /// Encoding: base64 or buffer.
        #[arg(short, long)]
        format: Option<String>,
        /// File to write raw bytes to (required for buffer format).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a detection report.
    Report {
        /// Range start (ISO-8601 date or date-time, inclusive).
        #[arg(long)]
        start: String,
        /// Range end (ISO-8601 date or date-time, inclusive).
        #[arg(long)]
        end: String,
        /// Report format: html, markdown or json.
        #[arg(short, long)]
        format: Option<String>,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Parse and validate confidence value.
fn parse_confidence(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(0.0..=1.0).contains(&value) {
        return Err(format!(
            "confidence must be between 0.0 and 1.0, got {value}"
        ));
    }

    Ok(value)
}
