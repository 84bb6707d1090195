use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-layers")]
use rayon::prelude::*;

use crate::core::FlowRecord;

/// Animation time at which every trip leaves its origin.
pub const TRIP_START_TIME: f64 = 0.0;
/// Animation time at which every trip reaches the venue.
pub const TRIP_END_TIME: f64 = 2000.0;

/// Green/blue channels shared by every trip color.
const TRIP_GREEN: u8 = 100;
const TRIP_BLUE: u8 = 255;

/// Two-point animated path derived from one flow record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripPath {
    pub path: [[f64; 2]; 2],
    pub timestamps: [f64; 2],
    /// RGB only; the trip layer applies its own alpha.
    pub color: [u8; 3],
    pub weight: f64,
}

impl TripPath {
    #[must_use]
    pub fn from_record(record: &FlowRecord) -> Self {
        Self {
            path: [record.from.position(), record.to.position()],
            timestamps: [TRIP_START_TIME, TRIP_END_TIME],
            color: [record.hue_channel(), TRIP_GREEN, TRIP_BLUE],
            weight: record.weight,
        }
    }
}

/// Derives one trip per record, preserving record order.
#[must_use]
pub fn derive_trip_paths(records: &[FlowRecord]) -> Vec<TripPath> {
    #[cfg(feature = "parallel-layers")]
    {
        records.par_iter().map(TripPath::from_record).collect()
    }

    #[cfg(not(feature = "parallel-layers"))]
    {
        records.iter().map(TripPath::from_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{TRIP_END_TIME, TripPath, derive_trip_paths};
    use crate::core::{FlowRecord, GeoPoint};

    #[test]
    fn trip_path_follows_record_endpoints_and_hue() {
        let record = FlowRecord::new(
            GeoPoint::new(-3.2, 55.95),
            GeoPoint::new(-3.19, 55.953),
            100.0,
            40,
        )
        .expect("valid record");

        let trip = TripPath::from_record(&record);
        assert_eq!(trip.path, [[-3.2, 55.95], [-3.19, 55.953]]);
        assert_eq!(trip.timestamps, [0.0, TRIP_END_TIME]);
        assert_eq!(trip.color, [40, 100, 255]);
        assert_eq!(trip.weight, 100.0);
    }

    #[test]
    fn empty_records_yield_no_trips() {
        assert!(derive_trip_paths(&[]).is_empty());
    }
}
