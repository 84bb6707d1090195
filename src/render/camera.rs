use serde::{Deserialize, Serialize};

use crate::error::{FlowMapError, FlowMapResult};

pub const DEFAULT_LATITUDE: f64 = 55.9533;
pub const DEFAULT_LONGITUDE: f64 = -3.1883;
pub const DEFAULT_ZOOM: f64 = 11.3;
pub const DEFAULT_PITCH: f64 = 45.0;
pub const DEFAULT_BEARING: f64 = 15.0;

/// Initial camera handed to the map widget. The widget owns it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    /// Degrees from nadir.
    pub pitch: f64,
    /// Degrees clockwise from north.
    pub bearing: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            zoom: DEFAULT_ZOOM,
            pitch: DEFAULT_PITCH,
            bearing: DEFAULT_BEARING,
        }
    }
}

impl ViewState {
    pub fn validate(self) -> FlowMapResult<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(FlowMapError::InvalidConfig(
                "view latitude must be finite and in [-90, 90]".to_owned(),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(FlowMapError::InvalidConfig(
                "view longitude must be finite and in [-180, 180]".to_owned(),
            ));
        }
        if !self.zoom.is_finite() || self.zoom < 0.0 {
            return Err(FlowMapError::InvalidConfig(
                "view zoom must be finite and >= 0".to_owned(),
            ));
        }
        if !self.pitch.is_finite() || !(0.0..90.0).contains(&self.pitch) {
            return Err(FlowMapError::InvalidConfig(
                "view pitch must be finite and in [0, 90)".to_owned(),
            ));
        }
        if !self.bearing.is_finite() {
            return Err(FlowMapError::InvalidConfig(
                "view bearing must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Which camera gestures the map widget accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerOptions {
    pub pan: bool,
    pub zoom: bool,
    pub rotate: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            pan: true,
            zoom: true,
            rotate: true,
        }
    }
}

impl ControllerOptions {
    #[must_use]
    pub fn is_fully_enabled(self) -> bool {
        self.pan && self.zoom && self.rotate
    }
}
