use crate::render::FlowMapScene;

use super::{FlowLayers, FlowMapConfig};

/// Assembles one frame's layers with the configured camera, basemap and
/// tooltip styling. Layers land in fixed draw order: arc, trips, outer glow,
/// inner glow.
#[must_use]
pub fn compose_scene(config: &FlowMapConfig, layers: FlowLayers) -> FlowMapScene {
    layers.into_descriptors().into_iter().fold(
        FlowMapScene::new(
            config.initial_view_state,
            config.controller,
            config.basemap_style_url.0.clone(),
            config.tooltip_style.clone(),
        ),
        FlowMapScene::with_layer,
    )
}

#[cfg(test)]
mod tests {
    use super::compose_scene;
    use crate::api::{FlowMapConfig, build_flow_layers};
    use crate::core::{AnimationClock, FlowRecordStore};
    use crate::render::FlowLayerKind;

    #[test]
    fn empty_scene_keeps_camera_and_all_layers() {
        let config = FlowMapConfig::default();
        let layers = build_flow_layers(
            &FlowRecordStore::default(),
            AnimationClock::default(),
            &config.style,
        );
        let scene = compose_scene(&config, layers);

        assert!(scene.is_empty());
        assert_eq!(scene.layers.len(), 4);
        let kinds: Vec<FlowLayerKind> = scene.layers_in_draw_order().map(|l| l.kind()).collect();
        assert_eq!(kinds, FlowLayerKind::CANONICAL_ORDER.to_vec());
        assert_eq!(scene.initial_view_state.zoom, 11.3);
        scene.validate().expect("valid empty scene");
    }
}
