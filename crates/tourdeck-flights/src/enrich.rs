//! Merging third-party flight-data payloads onto normalized segments.
//!
//! Enrichment is strictly additive: the payload supplies presentation-only
//! strings (airline display name, aircraft, status, terminal/gate, scheduled
//! times) and never touches the normalized core fields. Payload field names
//! vary by provider, so resolution reuses the ordered-alias approach from
//! [`crate::normalize`].

use serde_json::Value;
use tourdeck_core::{EnrichedSegment, NormalizedSegment};

use crate::normalize::resolve_string;

const AIRLINE_NAME_KEYS: &[&str] = &["airline_name", "airlineName", "carrier_name"];
const AIRCRAFT_KEYS: &[&str] = &["aircraft", "aircraft_type", "aircraftType", "equipment"];
const STATUS_KEYS: &[&str] = &["status", "flight_status", "flightStatus"];
const DEP_TERMINAL_KEYS: &[&str] = &["dep_terminal", "departure_terminal", "depTerminal"];
const DEP_GATE_KEYS: &[&str] = &["dep_gate", "departure_gate", "depGate"];
const ARR_TERMINAL_KEYS: &[&str] = &["arr_terminal", "arrival_terminal", "arrTerminal"];
const ARR_GATE_KEYS: &[&str] = &["arr_gate", "arrival_gate", "arrGate"];
const SCHEDULED_DEP_KEYS: &[&str] = &["scheduled_dep", "scheduledDeparture", "dep_scheduled"];
const SCHEDULED_ARR_KEYS: &[&str] = &["scheduled_arr", "scheduledArrival", "arr_scheduled"];

/// Wraps a segment with whatever presentation fields the payload carries.
///
/// Never fails: a payload that is not an object, or carries none of the
/// known fields, yields a bare wrapper. The wrapped segment is stored
/// untouched.
#[must_use]
pub fn enrich_segment(segment: NormalizedSegment, payload: &Value) -> EnrichedSegment {
    let Some(payload) = payload.as_object() else {
        return EnrichedSegment::bare(segment);
    };

    let scheduled_range = match (
        resolve_string(payload, SCHEDULED_DEP_KEYS),
        resolve_string(payload, SCHEDULED_ARR_KEYS),
    ) {
        (Some(dep), Some(arr)) => Some(format!("{dep}-{arr}")),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    };

    EnrichedSegment {
        airline_name: resolve_string(payload, AIRLINE_NAME_KEYS),
        aircraft: resolve_string(payload, AIRCRAFT_KEYS),
        status: resolve_string(payload, STATUS_KEYS),
        dep_terminal: resolve_string(payload, DEP_TERMINAL_KEYS),
        dep_gate: resolve_string(payload, DEP_GATE_KEYS),
        arr_terminal: resolve_string(payload, ARR_TERMINAL_KEYS),
        arr_gate: resolve_string(payload, ARR_GATE_KEYS),
        scheduled_range,
        segment,
    }
}
