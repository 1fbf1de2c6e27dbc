//! Normalization of loosely-typed segment records into
//! [`tourdeck_core::NormalizedSegment`].
//!
//! The record shape varies by caller — paste-parse results, manual-entry
//! forms, and external flight-data rows all name the same fields differently
//! — so each logical field is resolved through an ordered alias list, and a
//! fixed-format text fallback fills whatever the aliases could not. See
//! [`crate::navitas`] for the text pattern itself.

use serde_json::{Map, Value};
use tourdeck_core::NormalizedSegment;

use crate::navitas::segment_fields;

// Ordered by trust: canonical name first, then per-source variants. The
// first key present in the record wins, even when its value is empty.
const AIRLINE_KEYS: &[&str] = &["airline", "airline_code", "airline_iata", "carrier"];
const FLIGHT_NUMBER_KEYS: &[&str] = &["flightNumber", "flight_number", "number"];
const ORIGIN_KEYS: &[&str] = &[
    "origin",
    "from",
    "departureAirport",
    "dep_airport",
    "dep_iata",
    "dep",
];
const DESTINATION_KEYS: &[&str] = &[
    "destination",
    "to",
    "arrivalAirport",
    "arr_airport",
    "arr_iata",
    "arr",
];
const DEP_TIME_KEYS: &[&str] = &[
    "depTimeRaw",
    "departureTime",
    "dep_time",
    "dep_time_local",
    "dep",
    "dep_local",
];
const ARR_TIME_KEYS: &[&str] = &[
    "arrTimeRaw",
    "arrivalTime",
    "arr_time",
    "arr_time_local",
    "arr",
    "arr_local",
];
const DEP_DATE_KEYS: &[&str] = &["depDate", "dep_date", "departureDate", "date"];
const DAY_OFFSET_KEYS: &[&str] = &[
    "dayOffset",
    "plusDays",
    "arrivalDayOffset",
    "arrival_plus_days",
];

/// Key carrying the raw pasted text a record was derived from, used as the
/// extraction fallback for fields the aliases could not resolve.
const NAVITAS_TEXT_KEY: &str = "navitas_text";

/// Resolves a loosely-typed record into a [`NormalizedSegment`].
///
/// Best-effort by contract: this never fails. Fields that cannot be resolved
/// degrade to an empty string (codes) or `None` (times, date); a non-object
/// input degrades to an all-empty segment. JSON `null` values fall through
/// to the next alias, but an explicit empty string does not — the first
/// present key wins regardless of how falsy its value is.
#[must_use]
pub fn normalize_segment(record: &Value) -> NormalizedSegment {
    let Some(record) = record.as_object() else {
        return NormalizedSegment::empty();
    };

    let mut airline = resolve_string(record, AIRLINE_KEYS);
    let mut flight_number = resolve_string(record, FLIGHT_NUMBER_KEYS);
    let mut origin = resolve_string(record, ORIGIN_KEYS);
    let mut destination = resolve_string(record, DESTINATION_KEYS);
    let mut dep_time_raw = resolve_string(record, DEP_TIME_KEYS);
    let mut arr_time_raw = resolve_string(record, ARR_TIME_KEYS);
    let mut dep_date_raw = resolve_string(record, DEP_DATE_KEYS);
    let day_offset = resolve_day_offset(record);

    // Text fallback: only fields still missing after alias resolution are
    // filled from the fixed-format pattern. An explicit field always wins,
    // even when empty.
    let needs_fallback = airline.is_none()
        || flight_number.is_none()
        || origin.is_none()
        || destination.is_none();
    if needs_fallback {
        if let Some(fields) = record
            .get(NAVITAS_TEXT_KEY)
            .and_then(Value::as_str)
            .and_then(segment_fields)
        {
            airline = airline.or(Some(fields.airline));
            flight_number = flight_number.or(Some(fields.flight_number));
            origin = origin.or(Some(fields.origin));
            destination = destination.or(Some(fields.destination));
            dep_time_raw = dep_time_raw.or(Some(fields.dep_time));
            arr_time_raw = arr_time_raw.or(Some(fields.arr_time));
            dep_date_raw = dep_date_raw.or(Some(fields.dep_date));
        }
    }

    NormalizedSegment {
        airline: airline.unwrap_or_default().to_uppercase(),
        flight_number: flight_number.unwrap_or_default(),
        origin: origin.unwrap_or_default().to_uppercase(),
        destination: destination.unwrap_or_default().to_uppercase(),
        dep_time_raw,
        arr_time_raw,
        dep_date_raw,
        day_offset,
    }
}

/// Takes the first alias whose value is present and scalar, coerced to a
/// string. JSON `null`, arrays, and objects are treated as absent.
pub(crate) fn resolve_string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(value_to_string))
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Resolves the arrival day offset. The first non-null alias wins; its value
/// is coerced to a non-negative integer, degrading to 0 when absent,
/// negative, or unparseable.
fn resolve_day_offset(record: &Map<String, Value>) -> u32 {
    for key in DAY_OFFSET_KEYS {
        let Some(value) = record.get(*key) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        return coerce_day_offset(value);
    }
    0
}

fn coerce_day_offset(value: &Value) -> u32 {
    match value {
        // Day offsets are small (0-2 in practice); truncating a fractional
        // JSON number matches the integer-coercion contract.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .filter(|v| *v >= 0)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| *v >= 0)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        _ => 0,
    }
}
