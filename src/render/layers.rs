use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::TripPath;
use crate::error::{FlowMapError, FlowMapResult};
use crate::render::primitives::{
    Color, validate_non_negative, validate_opacity, validate_position,
};
use crate::render::FlowLayerKind;

/// Animated trip trails, one per flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripsLayer {
    pub id: String,
    pub data: Arc<[TripPath]>,
    /// Alpha applied to every trip color regardless of its source.
    pub color_alpha: u8,
    pub width_min_pixels: f64,
    pub trail_length: f64,
    pub fade_trail: bool,
    pub current_time: f64,
    pub opacity: f64,
}

impl TripsLayer {
    /// Final RGBA color for one trip.
    #[must_use]
    pub fn color_of(&self, trip: &TripPath) -> Color {
        Color::from_rgb_with_alpha(trip.color, self.color_alpha)
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        validate_opacity(self.opacity, "trips opacity")?;
        validate_non_negative(self.width_min_pixels, "trips min width")?;
        validate_non_negative(self.trail_length, "trips trail length")?;
        if !self.current_time.is_finite() {
            return Err(FlowMapError::InvalidData(
                "trips current time must be finite".to_owned(),
            ));
        }
        for trip in self.data.iter() {
            validate_position(trip.path[0], "trip origin")?;
            validate_position(trip.path[1], "trip destination")?;
        }
        Ok(())
    }
}

/// One resolved arc: endpoints plus pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDatum {
    pub source_position: [f64; 2],
    pub target_position: [f64; 2],
    pub width: f64,
}

/// Soft backdrop arcs from each origin to the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcLayer {
    pub id: String,
    pub data: Vec<ArcDatum>,
    pub source_color: Color,
    pub target_color: Color,
    pub opacity: f64,
}

impl ArcLayer {
    pub fn validate(&self) -> FlowMapResult<()> {
        validate_opacity(self.opacity, "arc opacity")?;
        for arc in &self.data {
            validate_position(arc.source_position, "arc source")?;
            validate_position(arc.target_position, "arc target")?;
            validate_non_negative(arc.width, "arc width")?;
        }
        Ok(())
    }
}

/// One venue marker. `weight` rides along for tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub position: [f64; 2],
    /// Radius in meters before the pixel floor is applied.
    pub radius: f64,
    pub weight: f64,
}

/// Venue glow markers (outer ring or inner dot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterplotLayer {
    pub id: String,
    pub kind: FlowLayerKind,
    pub data: Vec<ScatterPoint>,
    pub fill_color: Color,
    pub radius_min_pixels: f64,
    pub opacity: f64,
    pub pickable: bool,
}

impl ScatterplotLayer {
    pub fn validate(&self) -> FlowMapResult<()> {
        validate_opacity(self.opacity, "scatter opacity")?;
        validate_non_negative(self.radius_min_pixels, "scatter min radius")?;
        for point in &self.data {
            validate_position(point.position, "scatter position")?;
            validate_non_negative(point.radius, "scatter radius")?;
        }
        Ok(())
    }
}

/// Immutable descriptor for one rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayerDescriptor {
    Arc(ArcLayer),
    Trips(TripsLayer),
    Scatterplot(ScatterplotLayer),
}

impl LayerDescriptor {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Arc(layer) => &layer.id,
            Self::Trips(layer) => &layer.id,
            Self::Scatterplot(layer) => &layer.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FlowLayerKind {
        match self {
            Self::Arc(_) => FlowLayerKind::Arc,
            Self::Trips(_) => FlowLayerKind::Trips,
            Self::Scatterplot(layer) => layer.kind,
        }
    }

    /// Number of data items the layer draws.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Arc(layer) => layer.data.len(),
            Self::Trips(layer) => layer.data.len(),
            Self::Scatterplot(layer) => layer.data.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_pickable(&self) -> bool {
        match self {
            Self::Scatterplot(layer) => layer.pickable,
            Self::Arc(_) | Self::Trips(_) => false,
        }
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        if self.id().is_empty() {
            return Err(FlowMapError::InvalidData(
                "layer id must not be empty".to_owned(),
            ));
        }
        match self {
            Self::Arc(layer) => layer.validate(),
            Self::Trips(layer) => layer.validate(),
            Self::Scatterplot(layer) => layer.validate(),
        }
    }
}
