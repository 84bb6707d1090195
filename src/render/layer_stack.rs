use serde::{Deserialize, Serialize};

/// The four layers of a flow map scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowLayerKind {
    Arc,
    Trips,
    OuterGlow,
    InnerGlow,
}

impl FlowLayerKind {
    /// Draw order: later entries draw on top.
    pub const CANONICAL_ORDER: [Self; 4] =
        [Self::Arc, Self::Trips, Self::OuterGlow, Self::InnerGlow];

    #[must_use]
    pub const fn layer_id(self) -> &'static str {
        match self {
            Self::Arc => "arc",
            Self::Trips => "trips",
            Self::OuterGlow => "venue-glow-outer",
            Self::InnerGlow => "venue-glow-inner",
        }
    }

    #[must_use]
    pub fn z_index(self) -> usize {
        Self::CANONICAL_ORDER
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(Self::CANONICAL_ORDER.len())
    }
}

#[cfg(test)]
mod tests {
    use super::FlowLayerKind;

    #[test]
    fn glow_layers_draw_above_trips_and_arcs() {
        assert_eq!(FlowLayerKind::Arc.z_index(), 0);
        assert_eq!(FlowLayerKind::Trips.z_index(), 1);
        assert_eq!(FlowLayerKind::OuterGlow.z_index(), 2);
        assert_eq!(FlowLayerKind::InnerGlow.z_index(), 3);
    }

    #[test]
    fn layer_ids_are_stable() {
        let ids: Vec<&str> = FlowLayerKind::CANONICAL_ORDER
            .iter()
            .map(|kind| kind.layer_id())
            .collect();
        assert_eq!(ids, vec!["arc", "trips", "venue-glow-outer", "venue-glow-inner"]);
    }
}
