//! Detection log parsing.
//!
//! BirdNET stations write their log either as a JSON array of detection
//! objects or as a CSV table. Both decode to [`DetectionRecord`]s.

use crate::analytics::DetectionRecord;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// On-disk layout of a detection log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON array of detection objects.
    Json,
    /// CSV table with a header row.
    Csv,
}

impl LogFormat {
    /// Pick the format from the file extension. Anything but `.csv` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvDetection {
    #[serde(rename = "Species")]
    species: String,
    #[serde(rename = "Timestamp", default)]
    timestamp: Option<String>,
    #[serde(rename = "Confidence")]
    confidence: f64,
    #[serde(rename = "Audio file", default)]
    audio_file: Option<String>,
}

/// Parse a JSON detection log.
///
/// # Errors
///
/// Returns [`Error::DetectionLogParse`] if the content is not a JSON array of
/// detection objects.
pub fn parse_json_log(path: &Path, contents: &[u8]) -> Result<Vec<DetectionRecord>> {
    serde_json::from_slice(contents).map_err(|e| Error::DetectionLogParse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Parse a CSV detection log.
///
/// Expects a header row with `Species`, `Timestamp` and `Confidence`
/// columns and an optional `Audio file` column. Handles a UTF-8 BOM, quoted
/// fields and surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::DetectionLogParse`] if a required column is missing or a
/// value cannot be decoded. Header-only or empty input yields no records.
pub fn parse_csv_log(path: &Path, contents: &[u8]) -> Result<Vec<DetectionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents);

    let mut records = Vec::new();

    for (line_num, result) in reader.deserialize::<CsvDetection>().enumerate() {
        let row = result.map_err(|e| Error::DetectionLogParse {
            path: path.to_path_buf(),
            source: format!("line {}: {e}", line_num + 2).into(),
        })?;

        records.push(DetectionRecord {
            species: row.species,
            timestamp: row.timestamp.filter(|t| !t.is_empty()),
            confidence: row.confidence,
            audio_file: row.audio_file.filter(|f| !f.is_empty()),
            location: None,
        });
    }

    Ok(records)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("detections.test")
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(LogFormat::from_path(Path::new("a/detections.csv")), LogFormat::Csv);
        assert_eq!(LogFormat::from_path(Path::new("a/detections.CSV")), LogFormat::Csv);
        assert_eq!(LogFormat::from_path(Path::new("a/detections.json")), LogFormat::Json);
        assert_eq!(LogFormat::from_path(Path::new("a/detections")), LogFormat::Json);
    }

    #[test]
    fn test_parse_json_log() {
        let json = br#"[
            {"species": "American Robin", "confidence": 0.85,
             "timestamp": "2024-01-01T10:00:00", "audioFile": "robin1.wav",
             "location": {"latitude": 60.17, "longitude": 24.94}},
            {"species": "Northern Cardinal", "confidence": 0.92,
             "timestamp": "2024-01-02T11:30:00"}
        ]"#;
        let records = parse_json_log(path(), json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].audio_file.as_deref(), Some("robin1.wav"));
        assert_eq!(records[0].location.unwrap().latitude, 60.17);
        assert!(records[1].audio_file.is_none());
    }

    #[test]
    fn test_parse_json_missing_timestamp_is_kept() {
        let json = br#"[{"species": "Blue Jay", "confidence": 0.5}]"#;
        let records = parse_json_log(path(), json).unwrap();
        assert!(records[0].timestamp.is_none());
    }

    #[test]
    fn test_parse_json_malformed() {
        let result = parse_json_log(path(), b"{not json");
        assert!(matches!(result, Err(Error::DetectionLogParse { .. })));
    }

    #[test]
    fn test_parse_json_wrong_shape() {
        let result = parse_json_log(path(), br#"{"species": "Robin"}"#);
        assert!(matches!(result, Err(Error::DetectionLogParse { .. })));
    }

    #[test]
    fn test_parse_csv_log() {
        let csv = b"Species,Timestamp,Confidence,Audio file\n\
                    American Robin,2024-01-01T10:00:00,0.85,robin1.wav\n\
                    \"Owl, Barn\", 2024-01-02T01:30:00 ,0.78,\n";
        let records = parse_csv_log(path(), csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].audio_file.as_deref(), Some("robin1.wav"));
        assert_eq!(records[1].species, "Owl, Barn");
        assert_eq!(records[1].timestamp.as_deref(), Some("2024-01-02T01:30:00"));
        assert!(records[1].audio_file.is_none());
        assert_eq!(records[1].confidence, 0.78);
    }

    #[test]
    fn test_parse_csv_with_bom_and_no_audio_column() {
        let mut csv = b"\xEF\xBB\xBF".to_vec();
        csv.extend_from_slice(b"Species,Timestamp,Confidence\nWren,2024-01-01T05:00:00,0.6\n");
        let records = parse_csv_log(path(), &csv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].species, "Wren");
    }

    #[test]
    fn test_parse_csv_header_only() {
        let records = parse_csv_log(path(), b"Species,Timestamp,Confidence\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_csv_bad_confidence() {
        let csv = b"Species,Timestamp,Confidence\nWren,2024-01-01T05:00:00,high\n";
        let result = parse_csv_log(path(), csv);
        assert!(matches!(result, Err(Error::DetectionLogParse { .. })));
    }
}
