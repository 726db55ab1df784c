//! # Geofence Core
//!
//! Core types, traits and I/O for geofence area analysis.
//!
//! This crate provides:
//! - `GeofenceArea`: one geofenced region (circle or polygon) with its metadata
//! - `PropertyDefaults`: documented fallbacks for optional GeoJSON properties
//! - `CreatedAt`: creation timestamp that keeps the raw text when it cannot be parsed
//! - GeoJSON loading of geofence exports
//!
//! Coordinates follow the GeoJSON convention: `x` is longitude, `y` is latitude,
//! both in WGS84 degrees.

pub mod error;
pub mod geofence;
pub mod io;

pub use error::{Error, Result};
pub use geofence::{
    AreaKind, CreatedAt, GeofenceArea, PropertyDefaults, Shape, DEFAULT_MAP_FILE,
    MAP_DEFAULT_COLOR, REPORT_DEFAULT_COLOR,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geofence::{AreaKind, CreatedAt, GeofenceArea, PropertyDefaults, Shape};
    pub use crate::io::{parse_geojson, read_geojson};
    pub use crate::Algorithm;
}

/// Core trait for all analyses over geofence areas.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
