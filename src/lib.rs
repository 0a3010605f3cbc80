//! birdnet-insights - analytics over BirdNET detection logs.
//!
//! This crate queries, summarizes and reports on the detections a BirdNET
//! station has already recorded, and serves the audio clips behind them.

#![warn(missing_docs)]

pub mod analytics;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod query;
pub mod store;

use analytics::Period;
use clap::Parser;
use cli::{Cli, Command, ConfigAction, GlobalArgs, QueryCommand};
use config::{Config, config_file_path, load_default_config, save_default_config};
use output::{AudioSavedPayload, Operation, emit_result};
use query::{AudioFormat, AudioRecording, DetectionEngine, ReportFormat};
use std::path::{Path, PathBuf};
use store::FileStore;
use tracing::{debug, info};

pub use error::{Error, Result};

/// Main entry point for the birdnet-insights CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    let mut config = load_default_config()?;
    apply_overrides(&mut config, &cli.global);

    match cli.command {
        Command::Config { action } => handle_config_command(action, &config, cli.global.pretty),
        Command::Query(command) => {
            config::validate_config(&config)?;

            let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
                message: format!("failed to start async runtime: {e}"),
            })?;

            runtime.block_on(handle_query_command(command, &config, cli.global.pretty))
        }
    }
}

/// Apply command-line and environment overrides on top of the config file.
fn apply_overrides(config: &mut Config, global: &GlobalArgs) {
    if let Some(dir) = &global.data_dir {
        config.store.data_dir.clone_from(dir);
    }
    if let Some(dir) = &global.audio_dir {
        config.store.audio_dir.clone_from(dir);
    }
    if let Some(file) = &global.detection_file {
        config.store.detection_file.clone_from(file);
    }
}

async fn handle_query_command(
    command: QueryCommand,
    config: &Config,
    pretty: bool,
) -> Result<()> {
    let store = FileStore::from_config(&config.store);
    debug!(
        "Reading detections from {}, audio from {}",
        store.detection_log().display(),
        store.audio_dir().display()
    );
    let engine = DetectionEngine::new(store);

    match command {
        QueryCommand::Detections {
            start,
            end,
            species,
        } => {
            let result = engine
                .get_bird_detections(&start, &end, species.as_deref())
                .await?;
            info!("Found {} detection(s) between {start} and {end}", result.total);
            emit_result(Operation::BirdDetections, &result, pretty)
        }
        QueryCommand::Stats {
            period,
            min_confidence,
        } => {
            let period: Period = period.parse()?;
            let min_confidence = min_confidence.unwrap_or(config.defaults.min_confidence);
            let stats = engine.get_detection_stats(period, min_confidence).await?;
            info!(
                "{} detection(s) of {} species in period '{period}'",
                stats.total_detections, stats.unique_species
            );
            emit_result(Operation::DetectionStats, &stats, pretty)
        }
        QueryCommand::Activity { date, species } => {
            let activity = engine.get_daily_activity(&date, species.as_deref()).await?;
            info!(
                "{} detection(s) on {date}, peak hour {:02}:00",
                activity.total_detections, activity.peak_hour
            );
            emit_result(Operation::DailyActivity, &activity, pretty)
        }
        QueryCommand::Audio {
            filename,
            format,
            output,
        } => {
            let format: AudioFormat = match format {
                Some(token) => token.parse()?,
                None => config.defaults.audio_format,
            };
            handle_audio_command(&engine, &filename, format, output.as_deref(), pretty).await
        }
        QueryCommand::Report { start, end, format } => {
            let format: ReportFormat = match format {
                Some(token) => token.parse()?,
                None => config.defaults.report_format,
            };
            let report = engine
                .generate_detection_report(&start, &end, format)
                .await?;
            info!("Generated {format} report for {start} to {end}");
            emit_result(Operation::DetectionReport, &report, pretty)
        }
    }
}

async fn handle_audio_command(
    engine: &DetectionEngine<FileStore>,
    filename: &str,
    format: AudioFormat,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    // Raw bytes never go to stdout; buffer mode needs a destination file.
    if format == AudioFormat::Buffer && output.is_none() {
        return Err(Error::InvalidArgument {
            name: "output",
            value: String::new(),
            expected: "an --output file when using the buffer format",
        });
    }

    debug!(
        "Fetching clip {filename} from {} as {format}",
        engine.store().audio_dir().display()
    );
    let recording = engine.get_audio_recording(filename, format).await?;

    match (recording, output) {
        (AudioRecording::Buffer(bytes), Some(path)) => {
            tokio::fs::write(path, &bytes).await?;
            info!("Wrote {} byte(s) to {}", bytes.len(), path.display());
            let payload = AudioSavedPayload {
                filename: filename.to_string(),
                output_file: path.to_path_buf(),
                bytes: bytes.len(),
            };
            emit_result(Operation::AudioRecording, &payload, pretty)
        }
        (recording, _) => emit_result(Operation::AudioRecording, &recording, pretty),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction, config: &Config, pretty: bool) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path: PathBuf = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => emit_result(Operation::Config, config, pretty),
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries the JSON envelopes, so logs go to stderr.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
