//! Pairwise overlap detection
//!
//! Only circle footprints are compared. Any pair with a polygon (or an area
//! without geometry) on either side is reported as not overlapping; polygon
//! intersection is not implemented.
//!
//! Two circles overlap when the haversine distance between their centers is
//! strictly less than the sum of their radii. Tangent circles do not overlap.
//!
//! Pairs `(i, j)` with `i < j` are evaluated in index order and flagged pairs
//! are reported in that same order, also when the scan runs in parallel.

use crate::geodesy::{haversine_distance, latitude_separation};
use crate::maybe_rayon::*;
use geo_types::Point;
use geofence_core::{Algorithm, Error, GeofenceArea, Result};
use tracing::debug;

/// Margin in meters kept by the latitude pre-filter so that it never rejects a
/// pair the full formula would flag.
const PREFILTER_MARGIN_M: f64 = 1e-3;

/// Parameters for overlap detection
#[derive(Debug, Clone)]
pub struct OverlapParams {
    /// Skip the haversine evaluation when the latitude gap alone already
    /// exceeds the radii sum. Does not change results.
    pub prefilter: bool,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self { prefilter: true }
    }
}

/// A pair of areas flagged as probably overlapping
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapPair {
    /// 1-based index of the first area (always the lower one)
    pub first_index: usize,
    pub first_name: String,
    /// 1-based index of the second area
    pub second_index: usize,
    pub second_name: String,
    /// Center-to-center distance in meters
    pub distance: f64,
}

/// Outcome of an overlap scan
#[derive(Debug, Clone, PartialEq)]
pub enum OverlapReport {
    /// Fewer than two areas; no pair was evaluated
    NotPossible,
    /// Every pair was evaluated; flagged pairs in evaluation order (may be empty)
    Evaluated {
        pairs_checked: usize,
        overlaps: Vec<OverlapPair>,
    },
}

impl OverlapReport {
    /// Flagged pairs; empty when nothing was evaluated
    pub fn overlaps(&self) -> &[OverlapPair] {
        match self {
            OverlapReport::NotPossible => &[],
            OverlapReport::Evaluated { overlaps, .. } => overlaps,
        }
    }

    pub fn has_overlaps(&self) -> bool {
        !self.overlaps().is_empty()
    }
}

/// Overlap detection algorithm
#[derive(Debug, Clone, Default)]
pub struct OverlapDetection;

impl Algorithm for OverlapDetection {
    type Input = Vec<GeofenceArea>;
    type Output = OverlapReport;
    type Params = OverlapParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Overlap detection"
    }

    fn description(&self) -> &'static str {
        "Flags circle-circle pairs whose centers are closer than their radii sum"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        Ok(detect_overlaps(&input, &params))
    }
}

/// Haversine distance between two circles, `Some` only if they overlap
fn circle_overlap_distance(
    a: (Point<f64>, f64),
    b: (Point<f64>, f64),
    prefilter: bool,
) -> Option<f64> {
    let (c1, r1) = a;
    let (c2, r2) = b;
    let reach = r1 + r2;
    if prefilter {
        if let Some(gap) = latitude_separation(c1, c2) {
            if gap - reach > PREFILTER_MARGIN_M {
                return None;
            }
        }
    }
    let distance = haversine_distance(c1, c2);
    (distance < reach).then_some(distance)
}

/// Whether two circles overlap: center distance strictly below `r1 + r2`.
pub fn circles_overlap(c1: Point<f64>, r1: f64, c2: Point<f64>, r2: f64) -> bool {
    circle_overlap_distance((c1, r1), (c2, r2), false).is_some()
}

/// Whether two areas overlap. Always `false` unless both footprints are circles.
pub fn areas_overlap(a: &GeofenceArea, b: &GeofenceArea) -> bool {
    match (a.circle(), b.circle()) {
        (Some((c1, r1)), Some((c2, r2))) => circles_overlap(c1, r1, c2, r2),
        _ => false,
    }
}

/// Scan all unordered pairs for overlaps
pub fn detect_overlaps(areas: &[GeofenceArea], params: &OverlapParams) -> OverlapReport {
    let n = areas.len();
    if n < 2 {
        return OverlapReport::NotPossible;
    }

    let circles: Vec<Option<(Point<f64>, f64)>> = areas.iter().map(|a| a.circle()).collect();
    let prefilter = params.prefilter;

    let overlaps: Vec<OverlapPair> = (0..n)
        .into_par_iter()
        .flat_map(|i| {
            let mut row = Vec::new();
            let Some(first) = circles[i] else {
                return row;
            };
            for j in (i + 1)..n {
                let Some(second) = circles[j] else {
                    continue;
                };
                if let Some(distance) = circle_overlap_distance(first, second, prefilter) {
                    row.push(OverlapPair {
                        first_index: areas[i].index,
                        first_name: areas[i].name.clone(),
                        second_index: areas[j].index,
                        second_name: areas[j].name.clone(),
                        distance,
                    });
                }
            }
            row
        })
        .collect();

    let pairs_checked = n * (n - 1) / 2;
    debug!(
        "Overlap scan: {} pairs, {} flagged",
        pairs_checked,
        overlaps.len()
    );

    OverlapReport::Evaluated {
        pairs_checked,
        overlaps,
    }
}
