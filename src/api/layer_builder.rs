//! Pure builders turning flow records and the clock into layer descriptors.
//!
//! Every builder is stateless: the same records, time and style always yield
//! equal descriptors, and output lengths always equal the record count.

use std::sync::Arc;

#[cfg(feature = "parallel-layers")]
use rayon::prelude::*;

use crate::core::{AnimationClock, FlowRecord, FlowRecordStore, TripPath};
use crate::render::{
    ArcDatum, ArcLayer, FlowLayerKind, LayerDescriptor, ScatterPoint, ScatterplotLayer, TripsLayer,
};

use super::LayerStyle;

/// Arc width in pixels for a flow weight. Zero weight gives a zero-width arc.
#[must_use]
pub fn arc_width(weight: f64, style: &LayerStyle) -> f64 {
    weight.sqrt() * style.arc_width_scale
}

/// Outer glow radius in meters, non-decreasing in `weight`.
#[must_use]
pub fn outer_glow_radius(weight: f64, style: &LayerStyle) -> f64 {
    style.outer_glow_base_radius + weight.sqrt() * style.outer_glow_weight_scale
}

/// Inner glow radius in meters; independent of weight.
#[must_use]
pub fn inner_glow_radius(style: &LayerStyle) -> f64 {
    style.inner_glow_radius
}

pub fn build_trips_layer(trips: Arc<[TripPath]>, time: f64, style: &LayerStyle) -> TripsLayer {
    TripsLayer {
        id: FlowLayerKind::Trips.layer_id().to_owned(),
        data: trips,
        color_alpha: style.trip_color_alpha,
        width_min_pixels: style.trip_width_min_pixels,
        trail_length: style.trip_trail_length,
        fade_trail: style.trip_fade_trail,
        current_time: time,
        opacity: style.trip_opacity,
    }
}

pub fn build_arc_layer(records: &[FlowRecord], style: &LayerStyle) -> ArcLayer {
    ArcLayer {
        id: FlowLayerKind::Arc.layer_id().to_owned(),
        data: map_records(records, |record| ArcDatum {
            source_position: record.from.position(),
            target_position: record.to.position(),
            width: arc_width(record.weight, style),
        }),
        source_color: style.arc_source_color,
        target_color: style.arc_target_color,
        opacity: style.arc_opacity,
    }
}

pub fn build_outer_glow_layer(records: &[FlowRecord], style: &LayerStyle) -> ScatterplotLayer {
    ScatterplotLayer {
        id: FlowLayerKind::OuterGlow.layer_id().to_owned(),
        kind: FlowLayerKind::OuterGlow,
        data: map_records(records, |record| ScatterPoint {
            position: record.to.position(),
            radius: outer_glow_radius(record.weight, style),
            weight: record.weight,
        }),
        fill_color: style.outer_glow_color,
        radius_min_pixels: style.outer_glow_min_pixels,
        opacity: style.outer_glow_opacity,
        pickable: false,
    }
}

pub fn build_inner_glow_layer(records: &[FlowRecord], style: &LayerStyle) -> ScatterplotLayer {
    ScatterplotLayer {
        id: FlowLayerKind::InnerGlow.layer_id().to_owned(),
        kind: FlowLayerKind::InnerGlow,
        data: map_records(records, |record| ScatterPoint {
            position: record.to.position(),
            radius: inner_glow_radius(style),
            weight: record.weight,
        }),
        fill_color: style.inner_glow_color,
        radius_min_pixels: style.inner_glow_min_pixels,
        opacity: style.inner_glow_opacity,
        pickable: true,
    }
}

/// The four descriptors of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLayers {
    pub arc: ArcLayer,
    pub trips: TripsLayer,
    pub outer_glow: ScatterplotLayer,
    pub inner_glow: ScatterplotLayer,
}

impl FlowLayers {
    /// Descriptors bottom to top.
    #[must_use]
    pub fn into_descriptors(self) -> [LayerDescriptor; 4] {
        [
            LayerDescriptor::Arc(self.arc),
            LayerDescriptor::Trips(self.trips),
            LayerDescriptor::Scatterplot(self.outer_glow),
            LayerDescriptor::Scatterplot(self.inner_glow),
        ]
    }
}

/// Builds every layer for the current records and clock.
pub fn build_flow_layers(
    store: &FlowRecordStore,
    clock: AnimationClock,
    style: &LayerStyle,
) -> FlowLayers {
    let records = store.records();
    FlowLayers {
        arc: build_arc_layer(records, style),
        trips: build_trips_layer(store.trips_snapshot(), clock.time(), style),
        outer_glow: build_outer_glow_layer(records, style),
        inner_glow: build_inner_glow_layer(records, style),
    }
}

fn map_records<T, F>(records: &[FlowRecord], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&FlowRecord) -> T + Sync + Send,
{
    #[cfg(feature = "parallel-layers")]
    {
        records.par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel-layers"))]
    {
        records.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{arc_width, build_flow_layers, outer_glow_radius};
    use crate::api::LayerStyle;
    use crate::core::{AnimationClock, FlowRecordStore};

    #[test]
    fn zero_weight_is_total() {
        let style = LayerStyle::default();
        assert_eq!(arc_width(0.0, &style), 0.0);
        assert_eq!(outer_glow_radius(0.0, &style), 200.0);
    }

    #[test]
    fn empty_store_builds_empty_layers() {
        let layers = build_flow_layers(
            &FlowRecordStore::default(),
            AnimationClock::default(),
            &LayerStyle::default(),
        );
        assert!(layers.arc.data.is_empty());
        assert!(layers.trips.data.is_empty());
        assert!(layers.outer_glow.data.is_empty());
        assert!(layers.inner_glow.data.is_empty());
        assert_eq!(layers.trips.current_time, 0.0);
    }
}
