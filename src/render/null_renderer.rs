use crate::error::FlowMapResult;
use crate::render::{FlowMapScene, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates the scene so tests catch invalid descriptors before a
/// real backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: u64,
    pub last_layer_count: usize,
    pub last_datum_count: usize,
    pub last_trips_time: Option<f64>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &FlowMapScene) -> FlowMapResult<()> {
        scene.validate()?;
        self.frames_rendered += 1;
        self.last_layer_count = scene.layers.len();
        self.last_datum_count = scene.datum_count();
        self.last_trips_time = scene.layers.values().find_map(|layer| match layer {
            crate::render::LayerDescriptor::Trips(trips) => Some(trips.current_time),
            _ => None,
        });
        Ok(())
    }
}
