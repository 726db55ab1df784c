//! # Geofence Map
//!
//! Interactive map export for geofence areas.
//!
//! Produces a single self-contained HTML document that loads Leaflet from a CDN
//! and draws every circle and polygon area over OpenStreetMap tiles, with a
//! fullscreen toggle and a layer control. The main entry points are
//! [`render_map_html`] (pure) and [`write_map`].
//!
//! ## Usage
//!
//! ```ignore
//! use geofence_map::{write_map, MapOptions, MapOutcome};
//!
//! match write_map(&areas, &MapOptions::default())? {
//!     MapOutcome::Written(path) => println!("Map saved to {}", path.display()),
//!     MapOutcome::Empty => println!("No areas to map"),
//! }
//! ```

mod html;
mod layer;

pub use layer::{map_center, LayerGeometry, LayerStyle, MapLayer};

use geofence_core::{GeofenceArea, Result};
use std::path::PathBuf;
use tracing::info;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = geofence_core::DEFAULT_MAP_FILE;

/// Map center used when no area has coordinates (Sao Paulo), as (latitude, longitude)
pub const FALLBACK_CENTER: (f64, f64) = (-23.5505, -46.6333);

/// Options for map rendering
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Output HTML file
    pub output: PathBuf,
    /// Initial zoom level
    pub zoom_start: u8,
    /// Center as (latitude, longitude) when no coordinates are available
    pub fallback_center: (f64, f64),
    /// Page title
    pub title: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            zoom_start: 13,
            fallback_center: FALLBACK_CENTER,
            title: "Geofence areas".to_string(),
        }
    }
}

/// Result of a map export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOutcome {
    /// Map written to this path
    Written(PathBuf),
    /// No areas; nothing was written
    Empty,
}

/// Render the map document. Returns `None` when there are no areas.
pub fn render_map_html(areas: &[GeofenceArea], options: &MapOptions) -> Option<String> {
    if areas.is_empty() {
        return None;
    }
    let center = map_center(areas).unwrap_or(options.fallback_center);
    let layers: Vec<MapLayer> = areas.iter().filter_map(MapLayer::from_area).collect();
    Some(html::document(&options.title, center, options.zoom_start, &layers))
}

/// Render the map and write it to `options.output`.
pub fn write_map(areas: &[GeofenceArea], options: &MapOptions) -> Result<MapOutcome> {
    let Some(document) = render_map_html(areas, options) else {
        return Ok(MapOutcome::Empty);
    };
    std::fs::write(&options.output, document)?;
    info!("Map written to {}", options.output.display());
    Ok(MapOutcome::Written(options.output.clone()))
}
