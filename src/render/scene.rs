use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{FlowMapError, FlowMapResult};
use crate::render::{
    ControllerOptions, FlowLayerKind, LayerDescriptor, PickedObject, Tooltip, TooltipStyle,
    ViewState, venue_tooltip,
};

/// Backend-agnostic description of one flow map draw pass.
///
/// Layers are keyed by id and kept in draw order: later entries draw on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMapScene {
    pub initial_view_state: ViewState,
    pub controller: ControllerOptions,
    pub map_style: String,
    pub layers: IndexMap<String, LayerDescriptor>,
    pub tooltip_style: TooltipStyle,
}

impl FlowMapScene {
    #[must_use]
    pub fn new(
        initial_view_state: ViewState,
        controller: ControllerOptions,
        map_style: impl Into<String>,
        tooltip_style: TooltipStyle,
    ) -> Self {
        Self {
            initial_view_state,
            controller,
            map_style: map_style.into(),
            layers: IndexMap::new(),
            tooltip_style,
        }
    }

    /// Appends a layer on top, or replaces the layer with the same id in place.
    #[must_use]
    pub fn with_layer(mut self, layer: LayerDescriptor) -> Self {
        self.layers.insert(layer.id().to_owned(), layer);
        self
    }

    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&LayerDescriptor> {
        self.layers.get(id)
    }

    #[must_use]
    pub fn layer_of_kind(&self, kind: FlowLayerKind) -> Option<&LayerDescriptor> {
        self.layers.values().find(|layer| layer.kind() == kind)
    }

    /// Layers bottom to top.
    pub fn layers_in_draw_order(&self) -> impl Iterator<Item = &LayerDescriptor> {
        self.layers.values()
    }

    /// Total data items across all layers.
    #[must_use]
    pub fn datum_count(&self) -> usize {
        self.layers.values().map(LayerDescriptor::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datum_count() == 0
    }

    /// Tooltip callback for the renderer's hit test result.
    #[must_use]
    pub fn tooltip(&self, picked: Option<&PickedObject>) -> Option<Tooltip> {
        venue_tooltip(picked, &self.tooltip_style)
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        self.initial_view_state.validate()?;
        if self.map_style.trim().is_empty() {
            return Err(FlowMapError::InvalidData(
                "scene map style url must not be empty".to_owned(),
            ));
        }

        let mut last_z = None;
        for (id, layer) in &self.layers {
            if id != layer.id() {
                return Err(FlowMapError::InvalidData(format!(
                    "layer keyed `{id}` reports id `{}`",
                    layer.id()
                )));
            }
            let z = layer.kind().z_index();
            if last_z.is_some_and(|previous| z < previous) {
                return Err(FlowMapError::InvalidData(format!(
                    "layer `{id}` is out of draw order"
                )));
            }
            last_z = Some(z);
            layer.validate()?;
        }

        Ok(())
    }
}
