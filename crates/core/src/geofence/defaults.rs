//! Fallback values for optional GeoJSON properties

/// Color shown in the console report when an area has none
pub const REPORT_DEFAULT_COLOR: &str = "#000000";

/// Color used on the map when an area has none
pub const MAP_DEFAULT_COLOR: &str = "#2196F3";

/// File name of the exported interactive map
pub const DEFAULT_MAP_FILE: &str = "relatorio_geofence.html";

/// Defaults applied while building areas from feature properties.
///
/// `name` always falls back to `"Area {index}"`; the remaining fallbacks are
/// configurable here.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefaults {
    /// Circle radius in meters when `radius` is absent or invalid (default 100)
    pub radius: f64,
    /// Activity flag when `isActive` is absent (default true)
    pub is_active: bool,
}

impl Default for PropertyDefaults {
    fn default() -> Self {
        Self {
            radius: 100.0,
            is_active: true,
        }
    }
}
