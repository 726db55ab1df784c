//! Descriptive statistics for geofence areas
//!
//! - **summary**: aggregate counts over the whole collection
//! - **detail**: per-area display fields (circle area, polygon centroid)

mod detail;
mod summary;

pub use detail::{describe_area, polygon_centroid, GeometryDetail, AreaDetail};
pub use summary::{summarize, AreaSummary};

use geofence_core::{Algorithm, Error, GeofenceArea, Result};

/// Summary plus one detail entry per area, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsReport {
    pub summary: AreaSummary,
    pub details: Vec<AreaDetail>,
}

/// Aggregate and per-area statistics algorithm
#[derive(Debug, Clone, Default)]
pub struct AreaStatistics;

impl Algorithm for AreaStatistics {
    type Input = Vec<GeofenceArea>;
    type Output = StatisticsReport;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Area statistics"
    }

    fn description(&self) -> &'static str {
        "Counts by status and kind, plus circle area and polygon centroid per area"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(statistics(&input))
    }
}

/// Compute the full statistics report
pub fn statistics(areas: &[GeofenceArea]) -> StatisticsReport {
    StatisticsReport {
        summary: summarize(areas),
        details: areas.iter().map(describe_area).collect(),
    }
}
