//! flow-map-rs: declarative layer scene for animated venue flow maps.
//!
//! Flow records are loaded once from a static JSON resource, turned into four
//! immutable layer descriptors (arc, trips, outer glow, inner glow) on every
//! animation tick, and composed into a scene that an external map renderer
//! consumes.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{FlowMapConfig, FlowMapView};
pub use error::{FlowMapError, FlowMapResult};
