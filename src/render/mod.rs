mod camera;
mod layer_stack;
mod layers;
mod null_renderer;
mod primitives;
mod scene;
mod tooltip;

pub use camera::{
    ControllerOptions, DEFAULT_BEARING, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PITCH,
    DEFAULT_ZOOM, ViewState,
};
pub use layer_stack::FlowLayerKind;
pub use layers::{ArcDatum, ArcLayer, LayerDescriptor, ScatterPoint, ScatterplotLayer, TripsLayer};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, validate_non_negative, validate_opacity, validate_position};
pub use scene::FlowMapScene;
pub use tooltip::{PickedObject, Tooltip, TooltipStyle, venue_tooltip};

use crate::error::FlowMapResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully built, immutable `FlowMapScene`, so compositing
/// and picking stay isolated from data loading and animation.
pub trait Renderer {
    fn render(&mut self, scene: &FlowMapScene) -> FlowMapResult<()>;
}
