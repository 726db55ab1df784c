//! # Geofence Algorithms
//!
//! Analyses over a loaded set of geofence areas.
//!
//! ## Available Algorithm Categories
//!
//! - **geodesy**: Haversine great-circle distance
//! - **statistics**: Aggregate counts and per-area descriptive fields
//! - **overlap**: Pairwise circle-circle overlap detection

pub mod geodesy;
pub(crate) mod maybe_rayon;
pub mod overlap;
pub mod statistics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::geodesy::{haversine_distance, EARTH_RADIUS_M};
    pub use crate::overlap::{
        areas_overlap, circles_overlap, detect_overlaps, OverlapDetection, OverlapPair,
        OverlapParams, OverlapReport,
    };
    pub use crate::statistics::{
        describe_area, statistics, summarize, AreaDetail, AreaStatistics, AreaSummary,
        GeometryDetail, StatisticsReport,
    };
    pub use geofence_core::prelude::*;
}
