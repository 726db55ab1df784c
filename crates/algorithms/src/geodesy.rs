//! Great-circle distance on a spherical Earth
//!
//! Haversine formula, with all inputs in WGS84 degrees and `Point` coordinates
//! read as `x` = longitude, `y` = latitude:
//!
//!   a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
//!   c = 2·atan2(√a, √(1−a))
//!   d = R·c

use geo_types::Point;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine surface distance between two points, in meters
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lng1, lat1) = (a.x(), a.y());
    let (lng2, lat2) = (b.x(), b.y());

    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Lower bound on [`haversine_distance`]: the meridional separation alone.
///
/// Only holds for latitudes within [-90, 90]; `None` otherwise.
pub(crate) fn latitude_separation(a: Point<f64>, b: Point<f64>) -> Option<f64> {
    let in_range = |lat: f64| (-90.0..=90.0).contains(&lat);
    if !(in_range(a.y()) && in_range(b.y())) {
        return None;
    }
    Some(EARTH_RADIUS_M * (b.y() - a.y()).to_radians().abs())
}
