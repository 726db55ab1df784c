//! I/O operations for reading geofence exports

mod geojson;

pub use geojson::{
    parse_geojson, parse_geojson_slice, parse_geojson_with, read_geojson, read_geojson_with,
};
