//! Command output.

mod json_envelope;

pub use json_envelope::{AudioSavedPayload, JsonEnvelope, Operation};

use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Write `payload` wrapped in an envelope, followed by a newline.
pub fn write_result<W: Write, T: Serialize>(
    writer: &mut W,
    operation: Operation,
    payload: &T,
    pretty: bool,
) -> Result<()> {
    let envelope = JsonEnvelope::new(operation, payload);
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &envelope)
    } else {
        serde_json::to_writer(&mut *writer, &envelope)
    };
    written.map_err(|e| Error::JsonSerialize { source: e })?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Print `payload` wrapped in an envelope on stdout.
pub fn emit_result<T: Serialize>(operation: Operation, payload: &T, pretty: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_result(&mut handle, operation, payload, pretty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analytics::ConfidenceStats;

    #[test]
    fn test_write_result_single_line() {
        let mut buffer = Vec::new();
        write_result(
            &mut buffer,
            Operation::DetectionStats,
            &ConfidenceStats::default(),
            false,
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["operation"], "detection_stats");
        assert_eq!(value["payload"]["average"], 0.0);
    }

    #[test]
    fn test_write_result_pretty() {
        let mut buffer = Vec::new();
        write_result(&mut buffer, Operation::Config, &"ok", true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.lines().count() > 1);
    }
}
