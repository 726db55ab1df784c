//! Per-area descriptive fields

use geo_types::{LineString, Point};
use geofence_core::{AreaKind, GeofenceArea, Shape};
use std::f64::consts::PI;

/// Shape-specific display fields
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryDetail {
    Circle {
        /// Center as (latitude, longitude) for display
        center: (f64, f64),
        radius: f64,
        /// Planar estimate π·r² in square meters. Not geodesic.
        area: f64,
    },
    Polygon {
        /// Stored ring points minus the closing one
        vertex_count: usize,
        /// Approximate center as (latitude, longitude); `None` for an empty ring
        centroid: Option<(f64, f64)>,
    },
}

/// Display fields for one area
#[derive(Debug, Clone, PartialEq)]
pub struct AreaDetail {
    pub index: usize,
    pub name: String,
    pub kind: AreaKind,
    pub is_active: bool,
    pub geometry: Option<GeometryDetail>,
}

/// Describe one area. Geometry fields are only filled in when the declared
/// kind and the stored geometry agree.
pub fn describe_area(area: &GeofenceArea) -> AreaDetail {
    let geometry = area.declared_shape().map(|shape| match shape {
        Shape::Circle { center, radius } => circle_detail(*center, *radius),
        Shape::Polygon { ring } => GeometryDetail::Polygon {
            vertex_count: shape.vertex_count(),
            centroid: polygon_centroid(ring).map(|p| (p.y(), p.x())),
        },
    });

    AreaDetail {
        index: area.index,
        name: area.name.clone(),
        kind: area.kind.clone(),
        is_active: area.is_active,
        geometry,
    }
}

fn circle_detail(center: Point<f64>, radius: f64) -> GeometryDetail {
    GeometryDetail::Circle {
        center: (center.y(), center.x()),
        radius,
        area: PI * radius * radius,
    }
}

/// Arithmetic mean of every stored ring point, closing point included.
///
/// For small rings this leans toward the first vertex, which appears twice.
/// This is not the area-weighted centroid.
pub fn polygon_centroid(ring: &LineString<f64>) -> Option<Point<f64>> {
    let n = ring.0.len();
    if n == 0 {
        return None;
    }
    let (sum_x, sum_y) = ring
        .0
        .iter()
        .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
    Some(Point::new(sum_x / n as f64, sum_y / n as f64))
}
