use std::fs;

use approx::assert_relative_eq;
use flow_map::api::{
    FlowMapConfig, FlowMapView, FrameControl, InMemoryFetcher, ResourceFetcher, StaticDirFetcher,
};
use flow_map::error::{FlowMapError, FlowMapResult};
use flow_map::render::NullRenderer;

const ONE_FLOW: &str = r#"[
    {"from": {"lon": -3.2, "lat": 55.95}, "to": {"lon": -3.19, "lat": 55.953}, "weight": 100, "hue": 40}
]"#;

fn build_view(config: FlowMapConfig) -> FlowMapView<NullRenderer> {
    FlowMapView::new(NullRenderer::default(), config).expect("view init")
}

struct FailingFetcher;

impl ResourceFetcher for FailingFetcher {
    fn fetch(&self, location: &str) -> FlowMapResult<String> {
        Err(FlowMapError::Fetch {
            location: location.to_owned(),
            reason: "connection refused".to_owned(),
        })
    }
}

#[test]
fn mounted_view_advances_clock_each_frame() {
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");
    assert!(view.is_mounted());
    assert_eq!(view.renderer().frames_rendered, 1);

    for _ in 0..5 {
        assert_eq!(view.on_frame().expect("frame"), FrameControl::Continue);
    }
    assert_relative_eq!(view.time(), 4.0, epsilon = 1e-9);
    assert_eq!(view.renderer().frames_rendered, 6);
    assert_eq!(view.renderer().last_layer_count, 4);
    assert_relative_eq!(
        view.renderer().last_trips_time.expect("trips rendered"),
        4.0,
        epsilon = 1e-9
    );
}

#[test]
fn frames_after_unmount_do_not_advance_clock() {
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");
    view.on_frame().expect("frame");
    let time_at_teardown = view.time();
    let frames_at_teardown = view.renderer().frames_rendered;

    view.unmount();
    assert!(!view.is_mounted());
    assert_eq!(view.on_frame().expect("frame"), FrameControl::Break);
    assert_eq!(view.on_frame().expect("frame"), FrameControl::Break);
    assert_eq!(view.time(), time_at_teardown);
    assert_eq!(view.renderer().frames_rendered, frames_at_teardown);

    assert!(view.mount().is_err());
}

#[test]
fn frames_before_mount_are_ignored() {
    let mut view = build_view(FlowMapConfig::default());
    assert_eq!(view.on_frame().expect("frame"), FrameControl::Break);
    assert_eq!(view.time(), 0.0);
    assert_eq!(view.renderer().frames_rendered, 0);
}

#[test]
fn failed_fetch_leaves_empty_scene_without_error() {
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");

    let replaced = view.load_blocking(&FailingFetcher).expect("no error reaches the view");
    assert!(!replaced);
    assert!(view.records().is_empty());

    assert_eq!(view.on_frame().expect("frame"), FrameControl::Continue);
    let scene = view.scene();
    assert!(scene.is_empty());
    assert_eq!(scene.layers.len(), 4);
}

#[test]
fn malformed_resource_is_treated_as_failed_fetch() {
    let fetcher =
        InMemoryFetcher::default().with_resource("/rural_flows_edinburgh.json", "{\"not\": []}");
    let mut view = build_view(FlowMapConfig::default());
    assert!(!view.load_blocking(&fetcher).expect("load"));
    assert!(view.records().is_empty());
}

#[test]
fn background_load_is_applied_on_next_frame_path() {
    let fetcher = InMemoryFetcher::default().with_resource("/rural_flows_edinburgh.json", ONE_FLOW);
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");

    view.begin_load(fetcher);
    assert!(view.has_pending_load());
    assert!(view.wait_for_pending_load());
    assert!(!view.has_pending_load());
    assert_eq!(view.records().len(), 1);

    view.on_frame().expect("frame");
    assert_eq!(view.renderer().last_datum_count, 4);
}

#[test]
fn background_load_failure_keeps_records_empty() {
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");
    view.begin_load(FailingFetcher);
    assert!(!view.wait_for_pending_load());
    assert!(view.records().is_empty());
    assert_eq!(view.on_frame().expect("frame"), FrameControl::Continue);
}

#[test]
fn unmount_drops_in_flight_load() {
    let fetcher = InMemoryFetcher::default().with_resource("/rural_flows_edinburgh.json", ONE_FLOW);
    let mut view = build_view(FlowMapConfig::default());
    view.mount().expect("mount");
    view.begin_load(fetcher);

    view.unmount();
    assert!(!view.has_pending_load());
    assert!(!view.poll_pending_load());
    assert!(view.records().is_empty());
}

#[test]
fn static_dir_serves_resource_under_base_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("rural_flows_edinburgh.json"), ONE_FLOW).expect("write flows");

    let config = FlowMapConfig::default().with_base_path("/Edinburgh-map/");
    let fetcher = StaticDirFetcher::new(dir.path(), "/Edinburgh-map/");
    let mut view = build_view(config);
    assert_eq!(
        view.resource_location(),
        "/Edinburgh-map/rural_flows_edinburgh.json"
    );

    assert!(view.load_blocking(&fetcher).expect("load"));
    assert_eq!(view.records().len(), 1);
    assert_eq!(view.store().generation(), 1);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let mut config = FlowMapConfig::default();
    config.initial_view_state.zoom = -1.0;
    let err = FlowMapView::new(NullRenderer::default(), config)
        .err()
        .expect("invalid zoom");
    assert!(matches!(err, FlowMapError::InvalidConfig(_)));
}
