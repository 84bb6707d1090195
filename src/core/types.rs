use serde::{Deserialize, Serialize};

use crate::error::{FlowMapError, FlowMapResult};

/// Geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns the `[lon, lat]` pair consumed by layer accessors.
    #[must_use]
    pub const fn position(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

/// One weighted origin -> venue relationship as stored in the flow resource.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Ticket count.
    pub weight: f64,
    pub hue: i64,
}

impl FlowRecord {
    /// Builds a validated record.
    ///
    /// Invariants:
    /// - both endpoints are finite and within lon/lat bounds
    /// - `weight` is finite and `>= 0`
    pub fn new(from: GeoPoint, to: GeoPoint, weight: f64, hue: i64) -> FlowMapResult<Self> {
        let record = Self {
            from,
            to,
            weight,
            hue,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        if !self.from.is_valid() || !self.to.is_valid() {
            return Err(FlowMapError::InvalidData(
                "flow endpoints must be finite lon/lat degrees".to_owned(),
            ));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(FlowMapError::InvalidData(
                "flow weight must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Red channel derived from `hue`, reduced into `0..255`.
    #[must_use]
    pub fn hue_channel(&self) -> u8 {
        // rem_euclid keeps negative hues in range.
        self.hue.rem_euclid(255) as u8
    }

    #[must_use]
    pub fn sqrt_weight(&self) -> f64 {
        self.weight.sqrt()
    }
}
