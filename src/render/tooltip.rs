use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::ScatterPoint;

/// CSS-like styling forwarded verbatim to the tooltip element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipStyle {
    pub font_size: String,
    pub background_color: String,
    pub color: String,
    pub padding: String,
    pub border_radius: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            font_size: "14px".to_owned(),
            background_color: "#333".to_owned(),
            color: "#fff".to_owned(),
            padding: "6px 10px".to_owned(),
            border_radius: "6px".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    pub style: TooltipStyle,
}

/// Object reported by the renderer's hit test.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PickedObject {
    #[serde(default)]
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl PickedObject {
    /// Reads a picked datum as reported by a JSON-speaking renderer.
    ///
    /// Non-numeric or missing `weight` fields map to `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        let weight = value.get("weight").and_then(Value::as_f64);
        let position = value
            .get("position")
            .and_then(Value::as_array)
            .and_then(|pair| match pair.as_slice() {
                [lon, lat] => Some([lon.as_f64()?, lat.as_f64()?]),
                _ => None,
            });
        Self { position, weight }
    }
}

impl From<&ScatterPoint> for PickedObject {
    fn from(point: &ScatterPoint) -> Self {
        Self {
            position: Some(point.position),
            weight: Some(point.weight),
        }
    }
}

/// Tooltip for a hovered venue marker, or `None` when the object has no weight.
#[must_use]
pub fn venue_tooltip(picked: Option<&PickedObject>, style: &TooltipStyle) -> Option<Tooltip> {
    let weight = picked?.weight?;
    Some(Tooltip {
        text: format!("Venue — {weight} tickets"),
        style: style.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{PickedObject, TooltipStyle, venue_tooltip};

    #[test]
    fn integral_weight_prints_without_fraction() {
        let picked = PickedObject {
            position: None,
            weight: Some(100.0),
        };
        let tooltip = venue_tooltip(Some(&picked), &TooltipStyle::default()).expect("tooltip");
        assert_eq!(tooltip.text, "Venue — 100 tickets");
        assert_eq!(tooltip.style.background_color, "#333");
    }

    #[test]
    fn json_object_without_weight_has_no_tooltip() {
        let picked = PickedObject::from_json(&json!({"position": [-3.19, 55.953]}));
        assert_eq!(picked.position, Some([-3.19, 55.953]));
        assert!(venue_tooltip(Some(&picked), &TooltipStyle::default()).is_none());

        let picked = PickedObject::from_json(&json!({"weight": "lots"}));
        assert!(venue_tooltip(Some(&picked), &TooltipStyle::default()).is_none());
        assert!(venue_tooltip(None, &TooltipStyle::default()).is_none());
    }
}
