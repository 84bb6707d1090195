mod config;
mod data_source;
mod json_contract;
mod layer_builder;
mod scene_composer;
mod view;

pub use config::{
    BasemapStyleUrl, DEFAULT_BASE_PATH, DEFAULT_BASEMAP_STYLE_URL, DEFAULT_DATA_FILE,
    DataSourceConfig, FlowMapConfig, LayerStyle,
};
#[cfg(feature = "http-source")]
pub use data_source::HttpFetcher;
pub use data_source::{
    InMemoryFetcher, ResourceFetcher, StaticDirFetcher, load_flow_records, resolve_resource_path,
};
pub use json_contract::{FlowMapSceneJsonContractV1, SCENE_JSON_SCHEMA_V1};
pub use layer_builder::{
    FlowLayers, arc_width, build_arc_layer, build_flow_layers, build_inner_glow_layer,
    build_outer_glow_layer, build_trips_layer, inner_glow_radius, outer_glow_radius,
};
pub use scene_composer::compose_scene;
pub use view::{FlowMapView, FrameControl};
