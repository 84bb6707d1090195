use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{FlowRecord, TripPath, derive_trip_paths};
use crate::error::{FlowMapError, FlowMapResult};

/// Parses a flow resource document: a JSON array of flow records.
///
/// The whole document is rejected when any record is malformed or fails
/// validation, so the store never holds a partial list.
pub fn parse_flow_records(input: &str) -> FlowMapResult<Vec<FlowRecord>> {
    let records: Vec<FlowRecord> = serde_json::from_str(input)
        .map_err(|e| FlowMapError::Parse(format!("invalid flow json: {e}")))?;
    for (index, record) in records.iter().enumerate() {
        record.validate().map_err(|err| {
            FlowMapError::InvalidData(format!("flow record #{index} rejected: {err}"))
        })?;
    }
    Ok(records)
}

/// Loaded flow records plus the trip paths derived from them.
///
/// Both lists are replaced together as whole values; readers hold cheap
/// `Arc` snapshots that never change underneath them.
#[derive(Debug, Clone)]
pub struct FlowRecordStore {
    records: Arc<[FlowRecord]>,
    trips: Arc<[TripPath]>,
    generation: u64,
}

impl Default for FlowRecordStore {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            trips: Arc::from(Vec::new()),
            generation: 0,
        }
    }
}

impl FlowRecordStore {
    #[must_use]
    pub fn from_records(records: Vec<FlowRecord>) -> Self {
        let mut store = Self::default();
        store.replace(records);
        store
    }

    /// Replaces the record list wholesale and re-derives trips.
    pub fn replace(&mut self, records: Vec<FlowRecord>) {
        let trips = derive_trip_paths(&records);
        self.records = Arc::from(records);
        self.trips = Arc::from(trips);
        self.generation += 1;
        debug!(
            count = self.records.len(),
            generation = self.generation,
            "replace flow records"
        );
    }

    /// Applies the outcome of a resource load.
    ///
    /// Failures are logged and leave the current list untouched. Returns
    /// `true` when the records were replaced.
    pub fn apply_load(&mut self, outcome: FlowMapResult<Vec<FlowRecord>>) -> bool {
        match outcome {
            Ok(records) => {
                self.replace(records);
                true
            }
            Err(err) => {
                warn!(
                    error = %err,
                    kept = self.records.len(),
                    "flow resource load failed"
                );
                false
            }
        }
    }

    #[must_use]
    pub fn records(&self) -> &[FlowRecord] {
        &self.records
    }

    #[must_use]
    pub fn records_snapshot(&self) -> Arc<[FlowRecord]> {
        Arc::clone(&self.records)
    }

    #[must_use]
    pub fn trips_snapshot(&self) -> Arc<[TripPath]> {
        Arc::clone(&self.trips)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of successful replacements since creation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
