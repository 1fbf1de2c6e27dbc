//! Parsing of pasted Navitas-style booking text into flight options.
//!
//! The segment-line format is fixed: `AA 1234 LAX-JFK 15JAN 9:30A-6:40P`,
//! optionally with a 2-digit year on the date token and a `+N` next-day
//! suffix on the time range. Lines that deviate are recorded as
//! [`ParseIssue`]s and skipped; parsing always continues.

use std::sync::LazyLock;

use regex::Regex;
use tourdeck_core::NormalizedSegment;

use crate::error::ParseIssue;
use crate::types::{FlightOption, NavitasParse};

static SEGMENT_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([A-Z]{2})\s+(\d+)\s+([A-Z]{3})-([A-Z]{3})\s+(\d{1,2}[A-Z]{3}(?:\d{2})?)\s+(\d{1,2}:\d{2}[AP])-(\d{1,2}:\d{2}[AP])(?:\+(\d+))?",
    )
    .expect("valid segment line regex")
});

/// Field captures from one Navitas segment line.
#[derive(Debug, Clone)]
pub(crate) struct SegmentFields {
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub dep_date: String,
    pub dep_time: String,
    pub arr_time: String,
    pub plus_days: Option<u32>,
}

impl SegmentFields {
    fn into_segment(self) -> NormalizedSegment {
        NormalizedSegment {
            airline: self.airline,
            flight_number: self.flight_number,
            origin: self.origin,
            destination: self.destination,
            dep_time_raw: Some(self.dep_time),
            arr_time_raw: Some(self.arr_time),
            dep_date_raw: Some(self.dep_date),
            day_offset: self.plus_days.unwrap_or(0),
        }
    }
}

/// Extracts segment fields from the first fixed-format match in `text`.
///
/// Returns `None` when no match exists; the caller decides whether that is
/// a degraded field set (normalizer fallback) or a [`ParseIssue`] (line
/// parser).
pub(crate) fn segment_fields(text: &str) -> Option<SegmentFields> {
    let caps = SEGMENT_LINE_RE.captures(text)?;
    let plus_days = caps.get(8).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(SegmentFields {
        airline: caps[1].to_string(),
        flight_number: caps[2].to_string(),
        origin: caps[3].to_string(),
        destination: caps[4].to_string(),
        dep_date: caps[5].to_string(),
        dep_time: caps[6].to_string(),
        arr_time: caps[7].to_string(),
        plus_days,
    })
}

/// Parses pasted Navitas text into flight options.
///
/// Blocks of consecutive segment lines (separated by blank lines) form one
/// [`FlightOption`]. A line may carry leading clutter (option numbering,
/// bullet characters) — the fixed-format pattern is matched anywhere within
/// it. Non-matching non-empty lines become [`ParseIssue`]s.
#[must_use]
pub fn parse_navitas(text: &str) -> NavitasParse {
    let mut options = Vec::new();
    let mut issues = Vec::new();
    let mut current: Vec<NormalizedSegment> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                options.push(FlightOption {
                    segments: std::mem::take(&mut current),
                });
            }
            continue;
        }
        match segment_fields(trimmed) {
            Some(fields) => current.push(fields.into_segment()),
            None => {
                let issue = ParseIssue::unrecognized(idx + 1, trimmed);
                tracing::debug!(line = issue.line, "skipping unrecognized segment line");
                issues.push(issue);
            }
        }
    }
    if !current.is_empty() {
        options.push(FlightOption { segments: current });
    }

    NavitasParse { options, issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // segment_fields
    // -----------------------------------------------------------------------

    #[test]
    fn segment_fields_canonical_line() {
        let fields = segment_fields("AA 1234 LAX-JFK 15JAN 9:30A-6:40P").unwrap();
        assert_eq!(fields.airline, "AA");
        assert_eq!(fields.flight_number, "1234");
        assert_eq!(fields.origin, "LAX");
        assert_eq!(fields.destination, "JFK");
        assert_eq!(fields.dep_date, "15JAN");
        assert_eq!(fields.dep_time, "9:30A");
        assert_eq!(fields.arr_time, "6:40P");
        assert!(fields.plus_days.is_none());
    }

    #[test]
    fn segment_fields_date_with_year() {
        let fields = segment_fields("BA 283 LHR-LAX 02MAR26 11:05A-2:20P").unwrap();
        assert_eq!(fields.dep_date, "02MAR26");
    }

    #[test]
    fn segment_fields_next_day_suffix() {
        let fields = segment_fields("QF 12 LAX-SYD 15JAN 10:30P-6:40A+1").unwrap();
        assert_eq!(fields.plus_days, Some(1));
    }

    #[test]
    fn segment_fields_tolerates_leading_clutter() {
        let fields = segment_fields("1. AA 1234 LAX-JFK 15JAN 9:30A-6:40P").unwrap();
        assert_eq!(fields.airline, "AA");
    }

    #[test]
    fn segment_fields_rejects_lowercase_codes() {
        assert!(segment_fields("aa 1234 lax-jfk 15JAN 9:30A-6:40P").is_none());
    }

    #[test]
    fn segment_fields_rejects_missing_time_range() {
        assert!(segment_fields("AA 1234 LAX-JFK 15JAN").is_none());
    }

    #[test]
    fn segment_fields_rejects_iso_date_token() {
        assert!(segment_fields("AA 1234 LAX-JFK 2024-01-15 9:30A-6:40P").is_none());
    }

    // -----------------------------------------------------------------------
    // parse_navitas
    // -----------------------------------------------------------------------

    #[test]
    fn parse_navitas_single_option_single_segment() {
        let parse = parse_navitas("AA 1234 LAX-JFK 15JAN 9:30A-6:40P");
        assert_eq!(parse.options.len(), 1);
        assert_eq!(parse.options[0].segments.len(), 1);
        assert!(parse.issues.is_empty());
        let segment = &parse.options[0].segments[0];
        assert_eq!(segment.airline, "AA");
        assert_eq!(segment.dep_date_raw.as_deref(), Some("15JAN"));
        assert_eq!(segment.day_offset, 0);
    }

    #[test]
    fn parse_navitas_blank_line_separates_options() {
        let text = "AA 1234 LAX-JFK 15JAN 9:30A-6:40P\nAA 22 JFK-LHR 15JAN 9:00P-9:10A+1\n\nDL 450 LAX-JFK 15JAN 8:00A-4:25P\n";
        let parse = parse_navitas(text);
        assert_eq!(parse.options.len(), 2);
        assert_eq!(parse.options[0].segments.len(), 2);
        assert_eq!(parse.options[1].segments.len(), 1);
        assert!(parse.issues.is_empty());
    }

    #[test]
    fn parse_navitas_garbled_line_becomes_issue_neighbors_survive() {
        let text = "AA 1234 LAX-JFK 15JAN 9:30A-6:40P\ncall the promoter re: baggage\nAA 22 JFK-LHR 15JAN 9:00P-9:10A+1";
        let parse = parse_navitas(text);
        assert_eq!(parse.options.len(), 1);
        assert_eq!(parse.options[0].segments.len(), 2);
        assert_eq!(parse.issues.len(), 1);
        assert_eq!(parse.issues[0].line, 2);
    }

    #[test]
    fn parse_navitas_next_day_suffix_sets_day_offset() {
        let parse = parse_navitas("QF 12 LAX-SYD 15JAN 10:30P-6:40A+2");
        assert_eq!(parse.options[0].segments[0].day_offset, 2);
    }

    #[test]
    fn parse_navitas_empty_input_yields_nothing() {
        let parse = parse_navitas("");
        assert!(parse.options.is_empty());
        assert!(parse.issues.is_empty());
    }

    #[test]
    fn parse_navitas_multiple_blank_lines_do_not_create_empty_options() {
        let text = "AA 1234 LAX-JFK 15JAN 9:30A-6:40P\n\n\n\nDL 450 LAX-JFK 15JAN 8:00A-4:25P";
        let parse = parse_navitas(text);
        assert_eq!(parse.options.len(), 2);
    }

    #[test]
    fn parse_navitas_segment_count() {
        let text = "AA 1234 LAX-JFK 15JAN 9:30A-6:40P\n\nDL 450 LAX-JFK 15JAN 8:00A-4:25P\nDL 1 JFK-LHR 15JAN 7:00P-7:05A+1";
        assert_eq!(parse_navitas(text).segment_count(), 3);
    }
}
