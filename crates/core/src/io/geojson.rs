//! GeoJSON FeatureCollection loading
//!
//! Reads the geofencing app export: a FeatureCollection whose features carry a
//! `Point` (circle center) or `Polygon` geometry and the properties
//! `name`, `type`, `isActive`, `color`, `createdAt` and `radius`.
//!
//! Only the document structure is strict. Property values of the wrong JSON type
//! are treated as absent, and bad geometries leave the area without a shape.

use crate::error::{Error, Result};
use crate::geofence::{AreaKind, CreatedAt, GeofenceArea, PropertyDefaults, Shape};
use geo_types::{Coord, LineString, Point};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<RawProperties>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    coordinates: Value,
}

/// Recognized feature properties. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    kind: Option<String>,
    #[serde(rename = "isActive", default, deserialize_with = "lenient")]
    is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    color: Option<String>,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    radius: Option<f64>,
}

/// Deserialize a value of any JSON type, keeping it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Read a GeoJSON file into geofence areas using default property fallbacks
pub fn read_geojson<P: AsRef<Path>>(path: P) -> Result<Vec<GeofenceArea>> {
    read_geojson_with(path, &PropertyDefaults::default())
}

/// Read a GeoJSON file into geofence areas
pub fn read_geojson_with<P: AsRef<Path>>(
    path: P,
    defaults: &PropertyDefaults,
) -> Result<Vec<GeofenceArea>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    parse_geojson_slice(&bytes, defaults)
}

/// Parse a GeoJSON document held in memory
pub fn parse_geojson(text: &str) -> Result<Vec<GeofenceArea>> {
    parse_geojson_with(text, &PropertyDefaults::default())
}

/// Parse a GeoJSON document held in memory with explicit property fallbacks
pub fn parse_geojson_with(text: &str, defaults: &PropertyDefaults) -> Result<Vec<GeofenceArea>> {
    parse_geojson_slice(text.as_bytes(), defaults)
}

/// Parse a GeoJSON document from raw bytes
pub fn parse_geojson_slice(bytes: &[u8], defaults: &PropertyDefaults) -> Result<Vec<GeofenceArea>> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(Error::InvalidDocument(
            "top-level value must be a FeatureCollection object".to_string(),
        ));
    }
    let collection: RawCollection = serde_json::from_value(value)?;

    let areas: Vec<GeofenceArea> = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| build_area(i + 1, feature, defaults))
        .collect();

    debug!("Loaded {} geofence areas", areas.len());
    Ok(areas)
}

fn build_area(index: usize, feature: RawFeature, defaults: &PropertyDefaults) -> GeofenceArea {
    let props = feature.properties.unwrap_or_default();
    let radius = resolve_radius(index, props.radius, defaults);
    let shape = feature
        .geometry
        .as_ref()
        .and_then(|geom| build_shape(index, geom, radius));

    GeofenceArea {
        index,
        name: props
            .name
            .unwrap_or_else(|| GeofenceArea::default_name(index)),
        kind: AreaKind::from_property(props.kind.as_deref()),
        is_active: props.is_active.unwrap_or(defaults.is_active),
        color: props.color,
        created_at: props
            .created_at
            .filter(|s| !s.is_empty())
            .map(|s| CreatedAt::parse(&s)),
        shape,
    }
}

fn resolve_radius(index: usize, radius: Option<f64>, defaults: &PropertyDefaults) -> f64 {
    match radius {
        Some(r) if r.is_finite() && r >= 0.0 => r,
        Some(r) => {
            warn!("Area {}: invalid radius {}, using {}m", index, r, defaults.radius);
            defaults.radius
        }
        None => defaults.radius,
    }
}

fn build_shape(index: usize, geom: &RawGeometry, radius: f64) -> Option<Shape> {
    match geom.type_.as_str() {
        "Point" => match position(&geom.coordinates) {
            Some(c) => Some(Shape::Circle {
                center: Point::from(c),
                radius,
            }),
            None => {
                warn!("Area {}: malformed Point coordinates", index);
                None
            }
        },
        "Polygon" => match exterior_ring(&geom.coordinates) {
            Some(ring) => Some(Shape::Polygon { ring }),
            None => {
                warn!("Area {}: malformed Polygon coordinates", index);
                None
            }
        },
        other => {
            debug!("Area {}: unsupported geometry type {}", index, other);
            None
        }
    }
}

/// `[lng, lat, ...]` -> `Coord { x: lng, y: lat }`. Extra ordinates (altitude) are ignored.
fn position(value: &Value) -> Option<Coord<f64>> {
    let arr = value.as_array()?;
    let x = arr.first()?.as_f64()?;
    let y = arr.get(1)?.as_f64()?;
    Some(Coord { x, y })
}

/// First ring of a Polygon's coordinate array. A polygon with no rings yields an empty ring.
fn exterior_ring(value: &Value) -> Option<LineString<f64>> {
    let rings = value.as_array()?;
    let coords = match rings.first() {
        Some(ring) => ring
            .as_array()?
            .iter()
            .map(position)
            .collect::<Option<Vec<_>>>()?,
        None => Vec::new(),
    };
    Some(LineString::new(coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-46.6333, -23.5505] },
                "properties": {
                    "name": "Office",
                    "type": "circle",
                    "radius": 250,
                    "color": "#FF5722",
                    "createdAt": "2024-01-15T10:30:00Z"
                }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]
                },
                "properties": { "type": "polygon", "isActive": false }
            }
        ]
    }"##;

    #[test]
    fn test_parse_sample() {
        let areas = parse_geojson(SAMPLE).unwrap();
        assert_eq!(areas.len(), 2);

        let office = &areas[0];
        assert_eq!(office.index, 1);
        assert_eq!(office.name, "Office");
        assert_eq!(office.kind, AreaKind::Circle);
        assert!(office.is_active);
        assert_eq!(office.color.as_deref(), Some("#FF5722"));
        assert!(office.created_at.as_ref().unwrap().is_parsed());
        let (center, radius) = office.circle().unwrap();
        assert_eq!(center.x(), -46.6333);
        assert_eq!(center.y(), -23.5505);
        assert_eq!(radius, 250.0);

        let poly = &areas[1];
        assert_eq!(poly.name, "Area 2");
        assert!(!poly.is_active);
        assert_eq!(poly.color, None);
        assert_eq!(poly.ring().unwrap().0.len(), 5);
    }

    #[test]
    fn test_empty_collection() {
        let areas = parse_geojson(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(areas.is_empty());
        let areas = parse_geojson(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(areas.is_empty());
    }

    #[test]
    fn test_defaults_and_lenient_properties() {
        let text = r#"{"features": [
            {"geometry": {"type": "Point", "coordinates": [10, 20]},
             "properties": {"type": "circle", "isActive": "yes", "radius": "big", "name": 7}},
            {"geometry": {"type": "Point", "coordinates": [10, 20]},
             "properties": {"type": "circle", "radius": -5}},
            {"geometry": {"type": "Point", "coordinates": [10, 20]}}
        ]}"#;
        let areas = parse_geojson(text).unwrap();
        assert_eq!(areas[0].name, "Area 1");
        assert!(areas[0].is_active);
        assert_eq!(areas[0].circle().unwrap().1, 100.0);
        assert_eq!(areas[1].circle().unwrap().1, 100.0);
        assert_eq!(areas[2].kind.as_str(), "unknown");
        assert!(areas[2].circle().is_some());
    }

    #[test]
    fn test_custom_default_radius() {
        let defaults = PropertyDefaults { radius: 42.0, ..Default::default() };
        let text = r#"{"features": [{"geometry": {"type": "Point", "coordinates": [1, 2]}}]}"#;
        let areas = parse_geojson_with(text, &defaults).unwrap();
        assert_eq!(areas[0].circle().unwrap().1, 42.0);
    }

    #[test]
    fn test_bad_geometry_keeps_area() {
        let text = r#"{"features": [
            {"geometry": {"type": "Point", "coordinates": [1]}, "properties": {"type": "circle"}},
            {"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
            {"properties": {"name": "no geometry", "createdAt": ""}}
        ]}"#;
        let areas = parse_geojson(text).unwrap();
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().all(|a| a.shape.is_none()));
        assert_eq!(areas[2].name, "no geometry");
        assert!(areas[2].created_at.is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(parse_geojson("{not json"), Err(Error::Json(_))));
        assert!(matches!(parse_geojson("[1, 2]"), Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_geojson("/definitely/not/here.geojson").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, SAMPLE.as_bytes()).unwrap();
        let areas = read_geojson(file.path()).unwrap();
        assert_eq!(areas.len(), 2);
    }
}
