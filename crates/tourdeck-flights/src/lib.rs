pub mod enrich;
pub mod error;
pub mod key;
pub mod navitas;
pub mod normalize;
pub mod types;

pub use enrich::enrich_segment;
pub use error::ParseIssue;
pub use key::{flight_group_key, group_segments, normalize_dep_date, segment_group_key};
pub use navitas::parse_navitas;
pub use normalize::normalize_segment;
pub use types::{FlightOption, NavitasParse, SegmentGroup};
