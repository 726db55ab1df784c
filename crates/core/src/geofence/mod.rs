//! Geofence area model
//!
//! A [`GeofenceArea`] is built once from a GeoJSON feature and never mutated.
//! Two independent discriminators describe it:
//! - [`AreaKind`], from `properties.type`, drives the statistic buckets
//! - [`Shape`], from the feature geometry, carries the footprint used by geometry math

mod defaults;
mod timestamp;

pub use defaults::{PropertyDefaults, DEFAULT_MAP_FILE, MAP_DEFAULT_COLOR, REPORT_DEFAULT_COLOR};
pub use timestamp::CreatedAt;

use geo_types::{LineString, Point};
use std::fmt;

/// Declared kind of a geofence area (`properties.type`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaKind {
    Circle,
    Polygon,
    /// Anything else, including a missing value (kept as `"unknown"`).
    Unknown(String),
}

impl AreaKind {
    /// Map a `properties.type` value to a kind. Matching is exact, like the exporter writes it.
    pub fn from_property(value: Option<&str>) -> Self {
        match value {
            Some("circle") => AreaKind::Circle,
            Some("polygon") => AreaKind::Polygon,
            Some(other) => AreaKind::Unknown(other.to_string()),
            None => AreaKind::Unknown("unknown".to_string()),
        }
    }

    /// Raw property value
    pub fn as_str(&self) -> &str {
        match self {
            AreaKind::Circle => "circle",
            AreaKind::Polygon => "polygon",
            AreaKind::Unknown(raw) => raw,
        }
    }

    /// Display label in title case ("Circle", "Polygon", "Unknown", ...)
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Geometric footprint of an area
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Circle around a `Point` geometry
    Circle {
        /// `x` = longitude, `y` = latitude
        center: Point<f64>,
        /// Radius in meters, never negative
        radius: f64,
    },
    /// Exterior ring of a `Polygon` geometry, closed by convention (first == last)
    Polygon { ring: LineString<f64> },
}

impl Shape {
    /// Number of logical vertices: stored points minus the closing one.
    /// Zero for circles and empty rings.
    pub fn vertex_count(&self) -> usize {
        match self {
            Shape::Circle { .. } => 0,
            Shape::Polygon { ring } => ring.0.len().saturating_sub(1),
        }
    }
}

/// One geofenced region
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceArea {
    /// 1-based position in the source feature collection
    pub index: usize,
    pub name: String,
    pub kind: AreaKind,
    pub is_active: bool,
    /// Stored color; consumers supply their own default
    pub color: Option<String>,
    pub created_at: Option<CreatedAt>,
    /// `None` when the geometry is missing, unsupported or malformed
    pub shape: Option<Shape>,
}

impl GeofenceArea {
    /// Placeholder name for an area without `properties.name`
    pub fn default_name(index: usize) -> String {
        format!("Area {}", index)
    }

    /// Stored color, or `default` when absent
    pub fn color_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(default)
    }

    /// Circle center and radius, if the footprint is a circle
    pub fn circle(&self) -> Option<(Point<f64>, f64)> {
        match &self.shape {
            Some(Shape::Circle { center, radius }) => Some((*center, *radius)),
            _ => None,
        }
    }

    /// Polygon ring, if the footprint is a polygon
    pub fn ring(&self) -> Option<&LineString<f64>> {
        match &self.shape {
            Some(Shape::Polygon { ring }) => Some(ring),
            _ => None,
        }
    }

    /// Footprint matching the declared kind.
    ///
    /// Shape-specific output (detail lines, map layers) is only produced when the
    /// declared kind and the geometry agree.
    pub fn declared_shape(&self) -> Option<&Shape> {
        match (&self.kind, &self.shape) {
            (AreaKind::Circle, Some(shape @ Shape::Circle { .. })) => Some(shape),
            (AreaKind::Polygon, Some(shape @ Shape::Polygon { .. })) => Some(shape),
            _ => None,
        }
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
