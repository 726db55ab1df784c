//! Integration tests against the sample export `tests/fixtures/geofence_areas.geojson`.
//!
//! The fixture holds two nearby circles ("A", "B"), an inactive polygon, a distant
//! circle without radius and an area of unsupported kind and geometry.

use geofence_algorithms::overlap::{detect_overlaps, OverlapParams, OverlapReport};
use geofence_algorithms::statistics::{statistics, AreaStatistics, GeometryDetail};
use geofence_core::io::{parse_geojson, read_geojson};
use geofence_core::{Algorithm, GeofenceArea};
use std::path::{Path, PathBuf};

const FIXTURE: &str = "tests/fixtures/geofence_areas.geojson";

fn fixture_path() -> PathBuf {
    // CARGO_MANIFEST_DIR is the crate directory; fixtures live at the workspace root.
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest.parent().unwrap().parent().unwrap().join(FIXTURE)
}

fn load() -> Vec<GeofenceArea> {
    read_geojson(fixture_path()).expect("failed to read fixture")
}

#[test]
fn fixture_loads_in_order() {
    let areas = load();
    let names: Vec<&str> = areas.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "Warehouse", "Rio Office", "Area 5"]);
    assert!(areas.iter().enumerate().all(|(i, a)| a.index == i + 1));
}

#[test]
fn summary_counts() {
    let report = statistics(&load());
    let s = report.summary;
    assert_eq!(s.total, 5);
    assert_eq!(s.active, 4);
    assert_eq!(s.inactive, 1);
    assert_eq!(s.circles, 3);
    assert_eq!(s.polygons, 1);
    assert_eq!(s.other, 1);
    assert_eq!(s.total, s.circles + s.polygons + s.other);
}

#[test]
fn details_per_area() {
    let areas = load();
    let report = AreaStatistics.execute_default(areas.clone()).unwrap();
    assert_eq!(report.details.len(), 5);

    match report.details[0].geometry.as_ref().unwrap() {
        GeometryDetail::Circle { center, radius, area } => {
            assert_eq!(*center, (-23.5505, -46.6333));
            assert_eq!(*radius, 500.0);
            assert!((area - 785_398.163).abs() < 1e-2);
        }
        other => panic!("expected circle, got {:?}", other),
    }

    match report.details[2].geometry.as_ref().unwrap() {
        GeometryDetail::Polygon { vertex_count, centroid } => {
            assert_eq!(*vertex_count, 4);
            let (lat, lng) = centroid.unwrap();
            assert!((lat - -23.556).abs() < 1e-9);
            assert!((lng - -46.636).abs() < 1e-9);
        }
        other => panic!("expected polygon, got {:?}", other),
    }

    // Missing radius falls back to 100 m
    match report.details[3].geometry.as_ref().unwrap() {
        GeometryDetail::Circle { radius, .. } => assert_eq!(*radius, 100.0),
        other => panic!("expected circle, got {:?}", other),
    }
    assert!(!areas[3].created_at.as_ref().unwrap().is_parsed());
    assert_eq!(areas[0].created_at.as_ref().unwrap().display(), "15/01/2024 10:30");

    assert!(report.details[4].geometry.is_none());
}

#[test]
fn nearby_circles_flagged_once() {
    let report = detect_overlaps(&load(), &OverlapParams::default());
    let overlaps = report.overlaps();
    assert_eq!(overlaps.len(), 1);
    let pair = &overlaps[0];
    assert_eq!(pair.first_name, "A");
    assert_eq!(pair.second_name, "B");
    assert!(pair.distance > 60.0 && pair.distance < 70.0, "distance {}", pair.distance);
    match report {
        OverlapReport::Evaluated { pairs_checked, .. } => assert_eq!(pairs_checked, 10),
        OverlapReport::NotPossible => panic!("five areas must be evaluated"),
    }
}

#[test]
fn empty_collection_is_not_an_error() {
    let areas = parse_geojson(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
    let report = statistics(&areas);
    assert!(report.summary.is_empty());
    assert_eq!(report.summary.active + report.summary.inactive, 0);
    assert!(report.details.is_empty());
    assert_eq!(
        detect_overlaps(&areas, &OverlapParams::default()),
        OverlapReport::NotPossible
    );
}
