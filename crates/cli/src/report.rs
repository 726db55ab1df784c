//! Console report sections

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use geofence_algorithms::overlap::OverlapReport;
use geofence_algorithms::statistics::{AreaDetail, GeometryDetail, StatisticsReport};
use geofence_core::{GeofenceArea, REPORT_DEFAULT_COLOR};

const RULE_WIDTH: usize = 50;

/// What happened to the interactive map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapStatus {
    #[cfg_attr(not(feature = "map"), allow(dead_code))]
    Written(PathBuf),
    /// No areas, nothing drawn
    #[cfg_attr(not(feature = "map"), allow(dead_code))]
    Empty,
    /// Built without map support
    #[cfg_attr(feature = "map", allow(dead_code))]
    Unavailable,
    /// Disabled with `--no-map`
    Skipped,
}

fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn write_header<W: Write>(out: &mut W, input: &Path) -> io::Result<()> {
    writeln!(out, "GEOFENCE DATA ANALYZER")?;
    rule(out)?;
    writeln!(out, "Analyzing file: {}", input.display())
}

pub fn write_statistics<W: Write>(
    out: &mut W,
    areas: &[GeofenceArea],
    stats: &StatisticsReport,
) -> io::Result<()> {
    let s = &stats.summary;
    writeln!(out, "\nGEOFENCE AREA ANALYSIS")?;
    rule(out)?;
    writeln!(out, "Total areas: {}", s.total)?;
    writeln!(out, "Active areas: {}", s.active)?;
    writeln!(out, "Inactive areas: {}", s.inactive)?;
    writeln!(out, "Circles: {}", s.circles)?;
    writeln!(out, "Polygons: {}", s.polygons)?;

    if s.is_empty() {
        return writeln!(out, "No areas found in file.");
    }

    writeln!(out, "\nAREA DETAILS")?;
    rule(out)?;
    for (area, detail) in areas.iter().zip(&stats.details) {
        write_area(out, area, detail)?;
    }
    Ok(())
}

fn write_area<W: Write>(out: &mut W, area: &GeofenceArea, detail: &AreaDetail) -> io::Result<()> {
    let status = if detail.is_active { "[active]" } else { "[inactive]" };
    writeln!(out, "\n{}. {} {}", detail.index, detail.name, status)?;
    writeln!(out, "   Type: {}", detail.kind.label())?;
    writeln!(out, "   Color: {}", area.color_or(REPORT_DEFAULT_COLOR))?;
    if let Some(created) = &area.created_at {
        writeln!(out, "   Created: {}", created)?;
    }

    match &detail.geometry {
        Some(GeometryDetail::Circle { center, radius, area: surface }) => {
            writeln!(out, "   Center: {:.6}, {:.6}", center.0, center.1)?;
            writeln!(out, "   Radius: {}m", radius)?;
            writeln!(out, "   Area: {:.0}m²", surface)?;
        }
        Some(GeometryDetail::Polygon { vertex_count, centroid }) => {
            writeln!(out, "   Points: {}", vertex_count)?;
            if let Some((lat, lng)) = centroid {
                writeln!(out, "   Approx. center: {:.6}, {:.6}", lat, lng)?;
            }
        }
        None => {}
    }
    Ok(())
}

pub fn write_overlaps<W: Write>(out: &mut W, report: &OverlapReport) -> io::Result<()> {
    let overlaps = match report {
        OverlapReport::NotPossible => {
            return writeln!(out, "\nNo overlap possible (fewer than 2 areas)");
        }
        OverlapReport::Evaluated { overlaps, .. } => overlaps,
    };

    writeln!(out, "\nOVERLAP CHECK")?;
    rule(out)?;
    if overlaps.is_empty() {
        return writeln!(out, "No overlaps detected");
    }
    for pair in overlaps {
        writeln!(
            out,
            "Possible overlap: '{}' and '{}'",
            pair.first_name, pair.second_name
        )?;
    }
    Ok(())
}

pub fn write_map_status<W: Write>(out: &mut W, status: &MapStatus) -> io::Result<()> {
    match status {
        MapStatus::Written(path) => writeln!(out, "\nInteractive map saved to: {}", path.display()),
        MapStatus::Empty => writeln!(out, "\nNo areas to map."),
        MapStatus::Unavailable => writeln!(
            out,
            "\nWarning: map rendering is not available in this build (enable the `map` feature)"
        ),
        MapStatus::Skipped => Ok(()),
    }
}

pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAnalysis complete!")
}
