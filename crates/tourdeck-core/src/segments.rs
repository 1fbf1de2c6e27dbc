use serde::{Deserialize, Serialize};

/// A flight segment normalized from one of several heterogeneous sources
/// (pasted booking text, manual entry, external flight-data rows).
///
/// Construction never fails: fields that cannot be resolved degrade to an
/// empty string (codes) or `None` (times, date). Values are not mutated
/// after normalization — enrichment wraps a segment rather than editing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSegment {
    /// 2-letter IATA airline code, uppercased. Empty when unresolvable.
    pub airline: String,
    /// Numeric flight number as a string, e.g. `"1234"`. Empty when unresolvable.
    pub flight_number: String,
    /// 3-letter IATA airport code, uppercased. Empty when unresolvable.
    pub origin: String,
    /// 3-letter IATA airport code, uppercased. Empty when unresolvable.
    pub destination: String,
    /// Free-form local departure time exactly as the source wrote it,
    /// e.g. `"9:30A"`. Deliberately not parsed into a structured time.
    pub dep_time_raw: Option<String>,
    /// Free-form local arrival time, e.g. `"6:40P"`.
    pub arr_time_raw: Option<String>,
    /// Free-form departure-date token, e.g. `"15JAN"` or `"2024-01-15"`.
    /// Grouping derives the real departure date from this field.
    pub dep_date_raw: Option<String>,
    /// Arrival is this many calendar days after departure. 0 for same-day.
    pub day_offset: u32,
}

impl NormalizedSegment {
    /// Returns a segment with every field empty/absent — the degraded result
    /// of normalizing an input that carried no recognizable data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            airline: String::new(),
            flight_number: String::new(),
            origin: String::new(),
            destination: String::new(),
            dep_time_raw: None,
            arr_time_raw: None,
            dep_date_raw: None,
            day_offset: 0,
        }
    }

    /// Returns `true` when all four identifying fields were resolved.
    ///
    /// A segment failing this check is "could not be determined", not an
    /// error — callers surface it as a data-quality issue.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.airline.is_empty()
            && !self.flight_number.is_empty()
            && !self.origin.is_empty()
            && !self.destination.is_empty()
    }

    /// Display route, e.g. `"LAX-JFK"`.
    #[must_use]
    pub fn route(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    /// Display designator, e.g. `"AA 1234"`.
    #[must_use]
    pub fn designator(&self) -> String {
        format!("{} {}", self.airline, self.flight_number)
    }
}

/// A [`NormalizedSegment`] plus presentation-only fields sourced from a
/// third-party flight-data API.
///
/// Enrichment is additive: the wrapped segment is stored untouched and the
/// extra fields never override its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedSegment {
    pub segment: NormalizedSegment,
    /// Airline display name, e.g. `"American Airlines"`.
    pub airline_name: Option<String>,
    /// Aircraft type string, e.g. `"B738"`.
    pub aircraft: Option<String>,
    /// Live/scheduled status, e.g. `"scheduled"`, `"landed"`.
    pub status: Option<String>,
    pub dep_terminal: Option<String>,
    pub dep_gate: Option<String>,
    pub arr_terminal: Option<String>,
    pub arr_gate: Option<String>,
    /// Formatted scheduled-time range, e.g. `"9:30A – 6:40P"`.
    pub scheduled_range: Option<String>,
}

impl EnrichedSegment {
    /// Wraps a segment with no enrichment data attached.
    #[must_use]
    pub fn bare(segment: NormalizedSegment) -> Self {
        Self {
            segment,
            airline_name: None,
            aircraft: None,
            status: None,
            dep_terminal: None,
            dep_gate: None,
            arr_terminal: None,
            arr_gate: None,
            scheduled_range: None,
        }
    }

    /// Returns `true` when at least one enrichment field is populated.
    #[must_use]
    pub fn has_enrichment(&self) -> bool {
        self.airline_name.is_some()
            || self.aircraft.is_some()
            || self.status.is_some()
            || self.dep_terminal.is_some()
            || self.dep_gate.is_some()
            || self.arr_terminal.is_some()
            || self.arr_gate.is_some()
            || self.scheduled_range.is_some()
    }
}
