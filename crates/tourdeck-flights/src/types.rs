//! Domain types for the Navitas paste parser and segment grouping.

use serde::Serialize;
use tourdeck_core::NormalizedSegment;

use crate::error::ParseIssue;

/// One bookable flight option: a consecutive run of segments from a paste.
///
/// Multi-leg options carry one segment per leg, in paste order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightOption {
    pub segments: Vec<NormalizedSegment>,
}

impl FlightOption {
    /// Returns `true` when every segment resolved all four identifying fields.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        self.segments.iter().all(NormalizedSegment::is_resolved)
    }
}

/// Outcome of parsing pasted Navitas text: the options that parsed plus the
/// lines that did not. Never all-or-nothing — a paste with one garbled line
/// still yields every readable segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavitasParse {
    pub options: Vec<FlightOption>,
    pub issues: Vec<ParseIssue>,
}

impl NavitasParse {
    /// Total segment count across all options.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.options.iter().map(|o| o.segments.len()).sum()
    }
}

/// Segments sharing one flight grouping key, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentGroup {
    pub key: String,
    pub segments: Vec<NormalizedSegment>,
}
