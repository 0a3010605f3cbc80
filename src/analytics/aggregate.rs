//! Per-species and per-hour aggregation.
//!
//! Species grouping here is by exact label, unlike
//! [`super::filter_by_species`], which folds case and matches substrings.

use super::{DetectionRecord, HourlyActivity, SpeciesCount};
use crate::constants::{HOURS_PER_DAY, TOP_SPECIES_LIMIT};
use crate::error::Result;
use chrono::Timelike;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Count detections per exact species label.
pub fn species_counts<'a, I>(records: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.species.clone()).or_insert(0) += 1;
    }
    counts
}

/// Rank species by detection count, highest first, keeping the top ten.
///
/// Species with equal counts keep the order in which they first appear in
/// `records`.
pub fn species_ranking<'a, I>(records: I) -> Vec<SpeciesCount>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut ranking: Vec<SpeciesCount> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        if let Some(&position) = positions.get(record.species.as_str()) {
            ranking[position].count += 1;
        } else {
            positions.insert(record.species.as_str(), ranking.len());
            ranking.push(SpeciesCount {
                species: record.species.clone(),
                count: 1,
            });
        }
    }

    // Stable sort keeps first-seen order among ties.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(TOP_SPECIES_LIMIT);
    ranking
}

/// Number of distinct exact species labels.
pub fn unique_species<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    records
        .into_iter()
        .map(|record| record.species.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Bucket detections by local hour of day.
///
/// # Errors
///
/// Returns [`crate::Error::Parse`] if a record timestamp is missing or
/// malformed.
pub fn hourly_activity<'a, I>(records: I) -> Result<HourlyActivity>
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut buckets = [0_usize; HOURS_PER_DAY];
    for record in records {
        let hour = record.parsed_timestamp()?.hour() as usize;
        buckets[hour] += 1;
    }
    Ok(buckets)
}

/// Index of the busiest hour. Ties go to the earliest hour.
pub fn peak_hour(activity: &HourlyActivity) -> usize {
    let mut peak = 0;
    for (hour, &count) in activity.iter().enumerate() {
        if count > activity[peak] {
            peak = hour;
        }
    }
    peak
}
