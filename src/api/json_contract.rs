use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{FlowMapError, FlowMapResult};
use crate::render::{
    ArcLayer, ControllerOptions, FlowMapScene, LayerDescriptor, Renderer, ScatterplotLayer,
    TripsLayer,
};

use super::FlowMapView;

pub const SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowMapSceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: FlowMapScene,
}

impl FlowMapScene {
    pub fn to_json_contract_v1_pretty(&self) -> FlowMapResult<String> {
        let payload = FlowMapSceneJsonContractV1 {
            schema_version: SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            FlowMapError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Accepts either a bare scene or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> FlowMapResult<Self> {
        if let Ok(scene) = serde_json::from_str::<FlowMapScene>(input) {
            return Ok(scene);
        }
        let payload: FlowMapSceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            FlowMapError::InvalidData(format!("failed to parse scene json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_JSON_SCHEMA_V1 {
            return Err(FlowMapError::InvalidData(format!(
                "unsupported scene schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.scene)
    }

    /// Renders the scene in the layer library's declarative JSON form:
    /// `@@type` layer classes with `@@=` accessor expressions over inline data.
    #[must_use]
    pub fn to_layer_library_json(&self) -> Value {
        let layers: Vec<Value> = self
            .layers_in_draw_order()
            .map(|layer| match layer {
                LayerDescriptor::Arc(arc) => arc_layer_json(arc),
                LayerDescriptor::Trips(trips) => trips_layer_json(trips),
                LayerDescriptor::Scatterplot(scatter) => scatterplot_layer_json(scatter),
            })
            .collect();

        let view = self.initial_view_state;
        json!({
            "initialViewState": {
                "latitude": view.latitude,
                "longitude": view.longitude,
                "zoom": view.zoom,
                "pitch": view.pitch,
                "bearing": view.bearing,
            },
            "controller": controller_json(self.controller),
            "mapStyle": self.map_style,
            "layers": layers,
        })
    }

    pub fn to_layer_library_json_pretty(&self) -> FlowMapResult<String> {
        serde_json::to_string_pretty(&self.to_layer_library_json()).map_err(|e| {
            FlowMapError::InvalidData(format!("failed to serialize layer library json: {e}"))
        })
    }
}

fn controller_json(controller: ControllerOptions) -> Value {
    if controller.is_fully_enabled() {
        return Value::Bool(true);
    }
    json!({
        "dragPan": controller.pan,
        "scrollZoom": controller.zoom,
        "touchZoom": controller.zoom,
        "doubleClickZoom": controller.zoom,
        "dragRotate": controller.rotate,
        "touchRotate": controller.rotate,
    })
}

fn arc_layer_json(layer: &ArcLayer) -> Value {
    let data: Vec<Value> = layer
        .data
        .iter()
        .map(|arc| {
            json!({
                "source": arc.source_position,
                "target": arc.target_position,
                "width": arc.width,
            })
        })
        .collect();
    json!({
        "@@type": "ArcLayer",
        "id": layer.id,
        "data": data,
        "getSourcePosition": "@@=source",
        "getTargetPosition": "@@=target",
        "getSourceColor": layer.source_color,
        "getTargetColor": layer.target_color,
        "getWidth": "@@=width",
        "opacity": layer.opacity,
    })
}

fn trips_layer_json(layer: &TripsLayer) -> Value {
    let data: Vec<Value> = layer
        .data
        .iter()
        .map(|trip| {
            json!({
                "path": trip.path,
                "timestamps": trip.timestamps,
                "color": layer.color_of(trip),
                "weight": trip.weight,
            })
        })
        .collect();
    json!({
        "@@type": "TripsLayer",
        "id": layer.id,
        "data": data,
        "getPath": "@@=path",
        "getTimestamps": "@@=timestamps",
        "getColor": "@@=color",
        "widthMinPixels": layer.width_min_pixels,
        "trailLength": layer.trail_length,
        "currentTime": layer.current_time,
        "fadeTrail": layer.fade_trail,
        "opacity": layer.opacity,
    })
}

fn scatterplot_layer_json(layer: &ScatterplotLayer) -> Value {
    let data: Vec<Value> = layer
        .data
        .iter()
        .map(|point| {
            json!({
                "position": point.position,
                "radius": point.radius,
                "weight": point.weight,
            })
        })
        .collect();
    json!({
        "@@type": "ScatterplotLayer",
        "id": layer.id,
        "data": data,
        "getPosition": "@@=position",
        "getFillColor": layer.fill_color,
        "getRadius": "@@=radius",
        "radiusMinPixels": layer.radius_min_pixels,
        "opacity": layer.opacity,
        "pickable": layer.pickable,
    })
}

impl<R: Renderer> FlowMapView<R> {
    pub fn scene_json_contract_v1_pretty(&self) -> FlowMapResult<String> {
        self.scene().to_json_contract_v1_pretty()
    }

    pub fn layer_library_json_pretty(&self) -> FlowMapResult<String> {
        self.scene().to_layer_library_json_pretty()
    }
}
