use serde::{Deserialize, Serialize};

use crate::core::ClockConfig;
use crate::error::{FlowMapError, FlowMapResult};
use crate::render::{
    Color, ControllerOptions, TooltipStyle, ViewState, validate_non_negative, validate_opacity,
};

use super::resolve_resource_path;

pub const DEFAULT_BASEMAP_STYLE_URL: &str =
    "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_DATA_FILE: &str = "rural_flows_edinburgh.json";

/// Where the flow resource is served relative to the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSourceConfig {
    /// URL prefix the application is hosted under, e.g. `/Edinburgh-map/`.
    pub base_path: String,
    pub data_file: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            data_file: DEFAULT_DATA_FILE.to_owned(),
        }
    }
}

impl DataSourceConfig {
    #[must_use]
    pub fn resource_path(&self) -> String {
        resolve_resource_path(&self.base_path, &self.data_file)
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        if self.data_file.trim().trim_start_matches('/').is_empty() {
            return Err(FlowMapError::InvalidConfig(
                "data file must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Every visual constant of the four flow layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStyle {
    pub trip_color_alpha: u8,
    pub trip_width_min_pixels: f64,
    pub trip_trail_length: f64,
    pub trip_fade_trail: bool,
    pub trip_opacity: f64,

    pub arc_source_color: Color,
    pub arc_target_color: Color,
    /// Arc width is `sqrt(weight) * arc_width_scale`.
    pub arc_width_scale: f64,
    pub arc_opacity: f64,

    pub outer_glow_color: Color,
    /// Outer radius is `base + sqrt(weight) * weight_scale`, in meters.
    pub outer_glow_base_radius: f64,
    pub outer_glow_weight_scale: f64,
    pub outer_glow_min_pixels: f64,
    pub outer_glow_opacity: f64,

    pub inner_glow_color: Color,
    pub inner_glow_radius: f64,
    pub inner_glow_min_pixels: f64,
    pub inner_glow_opacity: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            trip_color_alpha: 130,
            trip_width_min_pixels: 2.0,
            trip_trail_length: 300.0,
            trip_fade_trail: true,
            trip_opacity: 0.6,

            arc_source_color: Color::rgba(120, 120, 255, 35),
            arc_target_color: Color::rgba(255, 220, 120, 50),
            arc_width_scale: 0.6,
            arc_opacity: 0.15,

            outer_glow_color: Color::rgba(255, 210, 70, 90),
            outer_glow_base_radius: 200.0,
            outer_glow_weight_scale: 6.0,
            outer_glow_min_pixels: 20.0,
            outer_glow_opacity: 1.0,

            inner_glow_color: Color::rgb(255, 230, 0),
            inner_glow_radius: 80.0,
            inner_glow_min_pixels: 12.0,
            inner_glow_opacity: 1.0,
        }
    }
}

impl LayerStyle {
    pub fn validate(self) -> FlowMapResult<()> {
        for (name, opacity) in [
            ("trip opacity", self.trip_opacity),
            ("arc opacity", self.arc_opacity),
            ("outer glow opacity", self.outer_glow_opacity),
            ("inner glow opacity", self.inner_glow_opacity),
        ] {
            validate_opacity(opacity, name).map_err(into_config_error)?;
        }
        for (name, value) in [
            ("trip min width", self.trip_width_min_pixels),
            ("trip trail length", self.trip_trail_length),
            ("arc width scale", self.arc_width_scale),
            ("outer glow base radius", self.outer_glow_base_radius),
            ("outer glow weight scale", self.outer_glow_weight_scale),
            ("outer glow min pixels", self.outer_glow_min_pixels),
            ("inner glow radius", self.inner_glow_radius),
            ("inner glow min pixels", self.inner_glow_min_pixels),
        ] {
            validate_non_negative(value, name).map_err(into_config_error)?;
        }
        Ok(())
    }
}

fn into_config_error(err: FlowMapError) -> FlowMapError {
    match err {
        FlowMapError::InvalidData(message) => FlowMapError::InvalidConfig(message),
        other => other,
    }
}

/// Public view bootstrap configuration.
///
/// Serializable so deployments can ship a JSON file instead of rebuilding.
/// Every field falls back to the stock Edinburgh venue map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlowMapConfig {
    pub data_source: DataSourceConfig,
    pub basemap_style_url: BasemapStyleUrl,
    pub initial_view_state: ViewState,
    pub controller: ControllerOptions,
    pub clock: ClockConfig,
    pub style: LayerStyle,
    pub tooltip_style: TooltipStyle,
}

/// Remote basemap style document URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasemapStyleUrl(pub String);

impl Default for BasemapStyleUrl {
    fn default() -> Self {
        Self(DEFAULT_BASEMAP_STYLE_URL.to_owned())
    }
}

impl FlowMapConfig {
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.data_source.base_path = base_path.into();
        self
    }

    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<String>) -> Self {
        self.data_source.data_file = data_file.into();
        self
    }

    pub fn validate(&self) -> FlowMapResult<()> {
        self.data_source.validate()?;
        if self.basemap_style_url.0.trim().is_empty() {
            return Err(FlowMapError::InvalidConfig(
                "basemap style url must not be empty".to_owned(),
            ));
        }
        self.initial_view_state.validate()?;
        self.clock.validate()?;
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> FlowMapResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| FlowMapError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> FlowMapResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FlowMapError::InvalidConfig(format!("failed to serialize config: {e}")))
    }
}
