//! Integration tests for the birdnet-insights binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const DETECTIONS_JSON: &str = r#"[
  {"species": "American Robin", "timestamp": "2024-01-01T08:15:00", "confidence": 0.9, "audioFile": "robin1.wav"},
  {"species": "American Robin", "timestamp": "2024-01-01T08:45:00", "confidence": 0.5},
  {"species": "House Sparrow", "timestamp": "2024-01-02T09:30:00", "confidence": 0.7}
]"#;

/// Station layout in a temp dir, with config lookups kept inside it.
struct Station {
    dir: TempDir,
}

impl Station {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("data")).unwrap();
        std::fs::create_dir_all(dir.path().join("audio")).unwrap();
        std::fs::write(dir.path().join("data/detections.json"), DETECTIONS_JSON).unwrap();
        std::fs::write(dir.path().join("audio/robin1.wav"), b"RIFF\x24\x00\x00\x00WAVE").unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("birdnet-insights");
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env("BIRDNET_DATA_PATH", self.path().join("data"))
            .env("BIRDNET_AUDIO_PATH", self.path().join("audio"))
            .env_remove("BIRDNET_DETECTION_FILE")
            .env_remove("BIRDNET_INSIGHTS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_detections_prints_envelope() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["detections", "--start", "2024-01-01", "--end", "2024-01-03"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["operation"], "bird_detections");
    assert_eq!(value["payload"]["total"], 3);
    assert_eq!(value["payload"]["detections"][0]["audioFile"], "robin1.wav");
}

#[test]
fn test_activity_scenario() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["activity", "--date", "2024-01-01"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    assert_eq!(payload["totalDetections"], 2);
    assert_eq!(payload["hourlyActivity"][8], 2);
    assert_eq!(payload["peakHour"], 8);
    assert_eq!(payload["uniqueSpecies"], 1);
}

#[test]
fn test_stats_with_min_confidence() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["stats", "--period", "all", "--min-confidence", "0.6"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    assert_eq!(payload["totalDetections"], 2);
    assert_eq!(payload["uniqueSpecies"], 2);
}

#[test]
fn test_stats_unknown_period_fails() {
    let station = Station::new();
    station
        .cmd()
        .args(["stats", "--period", "fortnight"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("error:").and(predicate::str::contains("fortnight")),
        );
}

#[test]
fn test_bad_date_fails() {
    let station = Station::new();
    station
        .cmd()
        .args(["activity", "--date", "not-a-date"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_missing_log_yields_empty_result() {
    let station = Station::new();
    station
        .cmd()
        .args(["--detection-file", "absent.json"])
        .args(["stats", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalDetections\":0"));
}

#[test]
fn test_csv_detection_log() {
    let station = Station::new();
    std::fs::write(
        station.path().join("data/detections.csv"),
        "\u{FEFF}Species,Timestamp,Confidence,Audio file\n\
         Blue Jay,2024-03-01T07:10:00,0.82,jay.wav\n\
         Blue Jay,2024-03-01T07:40:00,0.74,\n",
    )
    .unwrap();

    let output = station
        .cmd()
        .args(["--detection-file", "detections.csv"])
        .args(["activity", "--date", "2024-03-01", "--species", "jay"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    assert_eq!(payload["species"], "jay");
    assert_eq!(payload["totalDetections"], 2);
    assert_eq!(payload["peakHour"], 7);
}

#[test]
fn test_audio_base64() {
    let station = Station::new();
    let output = station.cmd().args(["audio", "robin1.wav"]).output().unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    assert_eq!(payload["format"], "base64");
    assert_eq!(payload["audio"], "UklGRiQAAABXQVZF");
}

#[test]
fn test_audio_buffer_writes_output_file() {
    let station = Station::new();
    let target = station.path().join("copy.wav");
    let output = station
        .cmd()
        .args(["audio", "robin1.wav", "--format", "buffer", "--output"])
        .arg(&target)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(std::fs::read(&target).unwrap(), b"RIFF\x24\x00\x00\x00WAVE");
    assert_eq!(stdout_json(&output)["payload"]["bytes"], 12);
}

#[test]
fn test_audio_buffer_requires_output() {
    let station = Station::new();
    station
        .cmd()
        .args(["audio", "robin1.wav", "--format", "buffer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn test_audio_missing_clip() {
    let station = Station::new();
    station
        .cmd()
        .args(["audio", "missing.wav"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.wav"));
}

#[test]
fn test_audio_rejects_parent_components() {
    let station = Station::new();
    station
        .cmd()
        .args(["audio", "../data/detections.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_report_markdown() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["report", "--start", "2024-01-01", "--end", "2024-01-03"])
        .args(["--format", "markdown"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    assert_eq!(payload["format"], "markdown");
    let text = payload["report"].as_str().unwrap();
    assert!(text.contains("# Bird Detection Report"));
    assert!(text.contains("1. American Robin (2)"));
}

#[test]
fn test_report_default_format_is_html() {
    let station = Station::new();
    station
        .cmd()
        .args(["report", "--start", "2024-01-01", "--end", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"format\":\"html\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["-vv", "stats", "--period", "week"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 1);
}

#[test]
fn test_config_show_reflects_overrides() {
    let station = Station::new();
    let output = station.cmd().args(["config", "show"]).output().unwrap();

    assert!(output.status.success());
    let payload = &stdout_json(&output)["payload"];
    let data_dir = station.path().join("data");
    assert_eq!(payload["store"]["data_dir"], data_dir.to_str().unwrap());
}

#[test]
fn test_explicit_config_file_sets_defaults() {
    let station = Station::new();
    let config_file = station.path().join("insights.toml");
    std::fs::write(&config_file, "[defaults]\nreport_format = \"markdown\"\n").unwrap();

    station
        .cmd()
        .env("BIRDNET_INSIGHTS_CONFIG", &config_file)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("insights.toml"));

    let output = station
        .cmd()
        .env("BIRDNET_INSIGHTS_CONFIG", &config_file)
        .args(["report", "--start", "2024-01-01", "--end", "2024-01-03"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["payload"]["format"], "markdown");
}

#[test]
fn test_report_format_token_is_exact() {
    let station = Station::new();
    station
        .cmd()
        .args(["report", "--start", "2024-01-01", "--end", "2024-01-03"])
        .args(["--format", "MD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("report format"));
}

#[test]
fn test_detections_with_offset_bounds() {
    let station = Station::new();
    let output = station
        .cmd()
        .args(["detections", "--start", "20240101T00", "--end", "2024-01-03T00:00Z"])
        .output()
        .unwrap();

    assert!(output.status.success());
}

#[test]
fn test_inverted_range_still_reports_bad_records() {
    let station = Station::new();
    std::fs::write(
        station.path().join("data/detections.json"),
        r#"[{"species": "Wren", "timestamp": "not-a-time", "confidence": 0.8}]"#,
    )
    .unwrap();

    station
        .cmd()
        .args(["detections", "--start", "2024-02-01", "--end", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-time"));
}
