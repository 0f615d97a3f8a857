//! Polygon and line styles, serialized with Leaflet's option names.

use crate::scale::ColorScale;
use geojson::Feature;
use mrb_basins::BasinFeature;
use serde::Serialize;

/// Border color of a basin that is not selected.
pub const DEFAULT_BORDER: &str = "white";
/// Border color of the selected basin.
pub const SELECTED_BORDER: &str = "blue";
/// Border color while the pointer is over a basin.
pub const HOVER_BORDER: &str = "#666";

pub const DEFAULT_WEIGHT: u32 = 2;
pub const SELECTED_WEIGHT: u32 = 5;
pub const HOVER_WEIGHT: u32 = 5;

pub const DASH_ARRAY: &str = "3";
pub const FILL_OPACITY: f64 = 0.7;
pub const HOVER_FILL_OPACITY: f64 = 0.9;

/// Style of a basin polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill_color: String,
    pub weight: u32,
    pub opacity: f64,
    pub color: String,
    pub dash_array: String,
    pub fill_opacity: f64,
}

impl Style {
    /// The transient style applied while the pointer is over this polygon:
    /// heavier solid border in the hover color, fill kept, higher opacity.
    pub fn hovered(&self) -> Style {
        Style {
            fill_color: self.fill_color.clone(),
            weight: HOVER_WEIGHT,
            opacity: 1.0,
            color: HOVER_BORDER.to_string(),
            dash_array: String::new(),
            fill_opacity: HOVER_FILL_OPACITY,
        }
    }
}

/// Compute the resting style of a basin.
///
/// A missing value is colored as `0`, so it renders the same as an explicit
/// zero. The basin whose `RIVERBASIN` equals `selected` gets the heavier
/// selection border.
pub fn style_for(
    scale: &ColorScale,
    key: &str,
    feature: &Feature,
    selected: Option<&str>,
) -> Style {
    let value = feature.metric_value(key).unwrap_or(0.0);
    let is_selected = matches!(selected, Some(id) if feature.basin_name() == Some(id));

    Style {
        fill_color: scale.evaluate(value),
        weight: if is_selected { SELECTED_WEIGHT } else { DEFAULT_WEIGHT },
        opacity: 1.0,
        color: if is_selected { SELECTED_BORDER } else { DEFAULT_BORDER }.to_string(),
        dash_array: DASH_ARRAY.to_string(),
        fill_opacity: FILL_OPACITY,
    }
}

/// Style of the rivers reference layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

pub fn rivers_style() -> LineStyle {
    LineStyle {
        color: "blue".to_string(),
        weight: 2,
        opacity: 1.0,
        fill_opacity: 0.0,
    }
}
