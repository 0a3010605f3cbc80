//! Record filters by date range and species.

use super::DetectionRecord;
use super::timestamp::parse_timestamp;
use crate::error::Result;
use chrono::NaiveDate;
use tracing::trace;

/// Keep records whose timestamp lies in `[start_date, end_date]`.
///
/// Both bounds are inclusive. When `start_date` is later than `end_date` the
/// result is empty; the bounds are never swapped. Every record timestamp is
/// parsed regardless of the bounds.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if either bound or any record timestamp is
/// missing or malformed.
pub fn filter_by_date_range<'a, I>(
    records: I,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<&'a DetectionRecord>>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let start = parse_timestamp(start_date)?;
    let end = parse_timestamp(end_date)?;

    if start > end {
        trace!("Date range {start} > {end}, nothing can match");
    }

    let mut kept = Vec::new();
    for record in records {
        let timestamp = record.parsed_timestamp()?;
        if start <= timestamp && timestamp <= end {
            kept.push(record);
        }
    }

    Ok(kept)
}

/// Keep records whose timestamp falls on the calendar day `date`.
///
/// This compares dates for equality; it is not a 24-hour window.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if a record timestamp is missing or
/// malformed.
pub fn filter_by_calendar_date<'a, I>(
    records: I,
    date: NaiveDate,
) -> Result<Vec<&'a DetectionRecord>>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut kept = Vec::new();
    for record in records {
        if record.parsed_timestamp()?.date() == date {
            kept.push(record);
        }
    }
    Ok(kept)
}

/// Keep records whose species label contains `species`, ignoring case.
///
/// This is a substring match, not an exact one. An empty query keeps every
/// record. Input order is preserved.
pub fn filter_by_species<'a, I>(records: I, species: &str) -> Vec<&'a DetectionRecord>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let needle = species.to_lowercase();
    records
        .into_iter()
        .filter(|record| record.species.to_lowercase().contains(&needle))
        .collect()
}
