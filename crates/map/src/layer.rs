//! Conversion of geofence areas to drawable map layers

use geo_types::Coord;
use geofence_core::{GeofenceArea, Shape, MAP_DEFAULT_COLOR};
use serde::Serialize;

/// Stroke and fill settings of one layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    pub color: String,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl LayerStyle {
    /// Style for an area: stored color if it is a hex value, `blue` otherwise,
    /// and `gray` with reduced opacity for inactive areas.
    pub fn for_area(area: &GeofenceArea) -> Self {
        let stored = area.color_or(MAP_DEFAULT_COLOR);
        let color = if !area.is_active {
            "gray"
        } else if stored.starts_with('#') {
            stored
        } else {
            "blue"
        };
        let (opacity, fill_opacity) = if area.is_active { (0.7, 0.3) } else { (0.3, 0.1) };
        Self {
            color: color.to_string(),
            opacity,
            fill_opacity,
        }
    }
}

/// Geometry in Leaflet order: `[latitude, longitude]`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum LayerGeometry {
    Circle { center: [f64; 2], radius: f64 },
    Polygon { locations: Vec<[f64; 2]> },
}

/// One drawable area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    #[serde(flatten)]
    pub geometry: LayerGeometry,
    pub style: LayerStyle,
    /// Popup body, already HTML-escaped
    pub popup: String,
}

impl MapLayer {
    /// Build the layer for an area; `None` when kind and geometry do not agree
    pub fn from_area(area: &GeofenceArea) -> Option<Self> {
        let geometry = match area.declared_shape()? {
            Shape::Circle { center, radius } => LayerGeometry::Circle {
                center: [center.y(), center.x()],
                radius: *radius,
            },
            Shape::Polygon { ring } => LayerGeometry::Polygon {
                locations: ring.0.iter().map(|c| [c.y, c.x]).collect(),
            },
        };
        Some(Self {
            geometry,
            style: LayerStyle::for_area(area),
            popup: popup(area),
        })
    }
}

fn popup(area: &GeofenceArea) -> String {
    format!(
        "<b>{}</b><br>Type: {}<br>Status: {}<br>Color: {}",
        escape_html(&area.name),
        escape_html(&area.kind.label()),
        if area.is_active { "Active" } else { "Inactive" },
        escape_html(area.color_or(MAP_DEFAULT_COLOR)),
    )
}

pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Mean position of every Point coordinate and every Polygon ring point,
/// as (latitude, longitude). Uses the stored geometry regardless of declared kind.
pub fn map_center(areas: &[GeofenceArea]) -> Option<(f64, f64)> {
    let coords = areas.iter().flat_map(|area| -> Vec<Coord<f64>> {
        match &area.shape {
            Some(Shape::Circle { center, .. }) => vec![center.0],
            Some(Shape::Polygon { ring }) => ring.0.clone(),
            None => Vec::new(),
        }
    });

    let (mut sum_lat, mut sum_lng, mut n) = (0.0, 0.0, 0usize);
    for c in coords {
        sum_lat += c.y;
        sum_lng += c.x;
        n += 1;
    }
    (n > 0).then(|| (sum_lat / n as f64, sum_lng / n as f64))
}
