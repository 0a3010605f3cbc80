//! ISO-8601 date and timestamp parsing.
//!
//! Detection logs store station-local wall-clock times. Offset-free values are
//! taken as written; values carrying `Z` or a numeric offset are converted to
//! the local time zone of the process so that hour bucketing reflects local
//! time in both cases.

use crate::error::{Error, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts carrying a numeric offset, tried in order.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
    "%Y%m%dT%H%M%S%.f%z",
    "%Y%m%dT%H%M%z",
];

/// Offset-free date-time layouts, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Date-only layouts (extended, then basic). Parse to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Parse an ISO-8601 date or date-time into station-local time.
///
/// Accepts extended (`YYYY-MM-DD`) and basic (`YYYYMMDD`) dates, optionally
/// followed by a `T` or space and a time of hour, minute or second precision
/// with an optional fraction. A trailing `Z` or numeric offset (`+02:00`,
/// `+0200`) converts the value to local time.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::parse(input, "empty date/time"));
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.with_timezone(&Local).naive_local());
    }

    let offset_text = match trimmed.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => trimmed.to_string(),
    };
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(with_offset) = DateTime::parse_from_str(&offset_text, format) {
            return Ok(with_offset.with_timezone(&Local).naive_local());
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    if let Some(parsed) = parse_hour_precision(trimmed) {
        return Ok(parsed);
    }

    parse_calendar_date(trimmed)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| Error::parse(input, "not an ISO-8601 date/time"))
}

/// Parse an ISO-8601 value and keep only its calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_timestamp(input).map(|parsed| parsed.date())
}

fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// `YYYY-MM-DDTHH` or `YYYYMMDDTHH`: a date plus a bare two-digit hour.
fn parse_hour_precision(s: &str) -> Option<NaiveDateTime> {
    let (date, hour) = s.split_once(['T', ' '])?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    parse_calendar_date(date)?.and_hms_opt(hour, 0, 0)
}
