//! Flight grouping keys and the departure-date normalization they rely on.
//!
//! Segments for the same physical flight arrive through different entry
//! paths (pasted text, manual entry, external rows). The grouping key is a
//! plain deterministic join of the identifying fields, so identical flights
//! collapse regardless of which path produced them.

use std::collections::HashMap;

use chrono::NaiveDate;
use tourdeck_core::NormalizedSegment;

use crate::types::SegmentGroup;

/// Builds the grouping key for one flight.
///
/// A fixed-order join with a fixed delimiter, nothing more: no validation,
/// no trimming. Callers pass already-normalized (uppercased, trimmed)
/// values; garbage in produces a garbage-but-deterministic key out.
#[must_use]
pub fn flight_group_key(
    airline: &str,
    flight_number: &str,
    dep_date: &str,
    origin: &str,
    destination: &str,
) -> String {
    format!("{airline}-{flight_number}-{dep_date}-{origin}-{destination}")
}

/// Normalizes a free-form departure-date token to ISO `YYYY-MM-DD`.
///
/// Accepts ISO dates as-is, `DDMMMYY` tokens (`"02MAR26"`), and year-less
/// `DDMMM` tokens (`"15JAN"`) completed with `reference_year`. Returns
/// `None` for anything else.
#[must_use]
pub fn normalize_dep_date(raw: &str, reference_year: i32) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        return None;
    }
    let parsed = NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(token, "%d%b%y"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{token}{reference_year}"), "%d%b%Y"))
        .ok()?;
    Some(parsed.format("%Y-%m-%d").to_string())
}

/// Builds the grouping key for a segment, deriving the departure date from
/// the segment's own date token.
///
/// An unresolvable or absent date degrades to an empty date component — the
/// key stays deterministic, and callers surface the missing date as a
/// data-quality issue.
#[must_use]
pub fn segment_group_key(segment: &NormalizedSegment, reference_year: i32) -> String {
    let dep_date = segment
        .dep_date_raw
        .as_deref()
        .and_then(|raw| normalize_dep_date(raw, reference_year))
        .unwrap_or_default();
    flight_group_key(
        &segment.airline,
        &segment.flight_number,
        &dep_date,
        &segment.origin,
        &segment.destination,
    )
}

/// Clusters segments by grouping key, preserving first-seen order.
#[must_use]
pub fn group_segments(segments: &[NormalizedSegment], reference_year: i32) -> Vec<SegmentGroup> {
    let mut groups: Vec<SegmentGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for segment in segments {
        let key = segment_group_key(segment, reference_year);
        match index_by_key.get(&key) {
            Some(&idx) => groups[idx].segments.push(segment.clone()),
            None => {
                index_by_key.insert(key.clone(), groups.len());
                groups.push(SegmentGroup {
                    key,
                    segments: vec![segment.clone()],
                });
            }
        }
    }
    groups
}
