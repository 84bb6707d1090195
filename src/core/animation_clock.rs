use serde::{Deserialize, Serialize};

use crate::error::{FlowMapError, FlowMapResult};

pub const DEFAULT_CLOCK_STEP: f64 = 0.8;
pub const DEFAULT_CLOCK_PERIOD: f64 = 2000.0;

/// Per-frame advance and wrap period, in animation units (not wall-clock).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_period")]
    pub period: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_CLOCK_STEP,
            period: DEFAULT_CLOCK_PERIOD,
        }
    }
}

impl ClockConfig {
    pub fn validate(self) -> FlowMapResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(FlowMapError::InvalidConfig(
                "clock step must be finite and > 0".to_owned(),
            ));
        }
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(FlowMapError::InvalidConfig(
                "clock period must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_step() -> f64 {
    DEFAULT_CLOCK_STEP
}

fn default_period() -> f64 {
    DEFAULT_CLOCK_PERIOD
}

/// Phase clock driving the trip trail head.
///
/// `time` always stays in `[0, period)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationClock {
    time: f64,
    config: ClockConfig,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            config: ClockConfig::default(),
        }
    }
}

impl AnimationClock {
    pub fn new(config: ClockConfig) -> FlowMapResult<Self> {
        config.validate()?;
        Ok(Self { time: 0.0, config })
    }

    #[must_use]
    pub fn time(self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn config(self) -> ClockConfig {
        self.config
    }

    /// Returns the clock one frame later.
    #[must_use]
    pub fn advanced(self) -> Self {
        let next = (self.time + self.config.step).rem_euclid(self.config.period);
        // rem_euclid may round up to exactly `period` for tiny negative residues.
        let time = if next >= self.config.period { 0.0 } else { next };
        Self { time, ..self }
    }

    /// Returns the clock `frames` frames later.
    #[must_use]
    pub fn advanced_by(self, frames: u64) -> Self {
        (0..frames).fold(self, |clock, _| clock.advanced())
    }

    pub fn tick(&mut self) {
        *self = self.advanced();
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self { time: 0.0, ..self }
    }
}
