pub mod animation_clock;
pub mod flow_store;
pub mod geo;
pub mod trip_path;
pub mod types;

pub use animation_clock::{AnimationClock, ClockConfig, DEFAULT_CLOCK_PERIOD, DEFAULT_CLOCK_STEP};
pub use flow_store::{FlowRecordStore, parse_flow_records};
pub use geo::{meters_per_pixel, on_screen_radius_px};
pub use trip_path::{TRIP_END_TIME, TRIP_START_TIME, TripPath, derive_trip_paths};
pub use types::{FlowRecord, GeoPoint};
