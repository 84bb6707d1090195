use serde::{Deserialize, Serialize};

use crate::error::{FlowMapError, FlowMapResult};

/// RGBA color with 8-bit channels, serialized as `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Builds a color from an RGB triple, ignoring any alpha the source had.
    #[must_use]
    pub const fn from_rgb_with_alpha(rgb: [u8; 3], alpha: u8) -> Self {
        Self::rgba(rgb[0], rgb[1], rgb[2], alpha)
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self::rgba(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_array()
    }
}

/// Validates a layer-wide opacity multiplier.
pub fn validate_opacity(opacity: f64, field_name: &str) -> FlowMapResult<()> {
    if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
        return Err(FlowMapError::InvalidData(format!(
            "{field_name} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

/// Validates a size that may be zero (arc widths, pixel floors).
pub fn validate_non_negative(value: f64, field_name: &str) -> FlowMapResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FlowMapError::InvalidData(format!(
            "{field_name} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Validates a `[lon, lat]` pair.
pub fn validate_position(position: [f64; 2], field_name: &str) -> FlowMapResult<()> {
    let [lon, lat] = position;
    if !lon.is_finite() || !lat.is_finite() {
        return Err(FlowMapError::InvalidData(format!(
            "{field_name} coordinates must be finite"
        )));
    }
    Ok(())
}
