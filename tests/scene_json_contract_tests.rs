use flow_map::api::{FlowMapConfig, FlowMapView, InMemoryFetcher, SCENE_JSON_SCHEMA_V1};
use flow_map::render::{FlowMapScene, NullRenderer};
use serde_json::Value;

const ONE_FLOW: &str = r#"[
    {"from": {"lon": -3.2, "lat": 55.95}, "to": {"lon": -3.19, "lat": 55.953}, "weight": 100, "hue": 40}
]"#;

fn loaded_view(ticks: u64) -> FlowMapView<NullRenderer> {
    let fetcher = InMemoryFetcher::default().with_resource("/rural_flows_edinburgh.json", ONE_FLOW);
    let mut view =
        FlowMapView::new(NullRenderer::default(), FlowMapConfig::default()).expect("view init");
    assert!(view.load_blocking(&fetcher).expect("load"));
    view.mount().expect("mount");
    for _ in 0..ticks {
        view.on_frame().expect("frame");
    }
    view
}

#[test]
fn layer_library_json_lists_layers_in_draw_order() {
    let view = loaded_view(5);
    let json: Value = serde_json::from_str(&view.layer_library_json_pretty().expect("json"))
        .expect("valid json");

    let types: Vec<&str> = json["layers"]
        .as_array()
        .expect("layers array")
        .iter()
        .map(|layer| layer["@@type"].as_str().expect("layer type"))
        .collect();
    assert_eq!(
        types,
        vec!["ArcLayer", "TripsLayer", "ScatterplotLayer", "ScatterplotLayer"]
    );

    assert_eq!(json["controller"], Value::Bool(true));
    assert_eq!(json["initialViewState"]["zoom"], 11.3);
    assert!(
        json["mapStyle"]
            .as_str()
            .expect("map style")
            .starts_with("https://basemaps.cartocdn.com/")
    );

    let trips = &json["layers"][1];
    assert_eq!(trips["id"], "trips");
    assert_eq!(trips["getPath"], "@@=path");
    assert_eq!(trips["trailLength"], 300.0);
    assert_eq!(trips["data"][0]["color"], serde_json::json!([40, 100, 255, 130]));
    let current_time = trips["currentTime"].as_f64().expect("current time");
    assert!((current_time - 4.0).abs() < 1e-9);

    let inner = &json["layers"][3];
    assert_eq!(inner["id"], "venue-glow-inner");
    assert_eq!(inner["pickable"], true);
    assert_eq!(inner["data"][0]["radius"], 80.0);
}

#[test]
fn restricted_controller_is_spelled_out() {
    let mut config = FlowMapConfig::default();
    config.controller.rotate = false;
    let view = FlowMapView::new(NullRenderer::default(), config).expect("view init");
    let json = view.scene().to_layer_library_json();

    assert_eq!(json["controller"]["dragPan"], true);
    assert_eq!(json["controller"]["dragRotate"], false);
}

#[test]
fn scene_contract_carries_schema_version() {
    let view = loaded_view(0);
    let raw = view.scene_json_contract_v1_pretty().expect("contract");
    let json: Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json["schema_version"], SCENE_JSON_SCHEMA_V1);

    let scene = FlowMapScene::from_json_compat_str(&raw).expect("parse contract");
    assert_eq!(scene.layers.len(), 4);
    assert_eq!(scene.datum_count(), 4);
    scene.validate().expect("parsed scene is valid");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let view = loaded_view(0);
    let raw = view.scene_json_contract_v1_pretty().expect("contract");
    let mut json: Value = serde_json::from_str(&raw).expect("valid json");
    json["schema_version"] = Value::from(2);

    let err = FlowMapScene::from_json_compat_str(&json.to_string()).expect_err("v2 unsupported");
    assert!(err.to_string().contains("unsupported scene schema version"));
}
