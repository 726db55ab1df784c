//! Aggregate counts

use geofence_core::{AreaKind, GeofenceArea};

/// Counts over a collection of areas.
///
/// `total == active + inactive` and `total == circles + polygons + other` always hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AreaSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Areas declared `"circle"`
    pub circles: usize,
    /// Areas declared `"polygon"`
    pub polygons: usize,
    /// Areas with any other or missing kind
    pub other: usize,
}

impl AreaSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count areas by activity and declared kind
pub fn summarize(areas: &[GeofenceArea]) -> AreaSummary {
    let mut summary = AreaSummary {
        total: areas.len(),
        ..Default::default()
    };

    for area in areas {
        match &area.kind {
            AreaKind::Circle => summary.circles += 1,
            AreaKind::Polygon => summary.polygons += 1,
            AreaKind::Unknown(_) => summary.other += 1,
        }
        if area.is_active {
            summary.active += 1;
        }
    }
    summary.inactive = summary.total - summary.active;

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(kind: AreaKind, is_active: bool) -> GeofenceArea {
        GeofenceArea {
            index: 1,
            name: "x".into(),
            kind,
            is_active,
            color: None,
            created_at: None,
            shape: None,
        }
    }

    #[test]
    fn test_empty() {
        let s = summarize(&[]);
        assert_eq!(s, AreaSummary::default());
        assert!(s.is_empty());
    }

    #[test]
    fn test_counts_balance() {
        let areas = vec![
            area(AreaKind::Circle, true),
            area(AreaKind::Circle, false),
            area(AreaKind::Polygon, true),
            area(AreaKind::Unknown("line".into()), false),
            area(AreaKind::Unknown("unknown".into()), true),
        ];
        let s = summarize(&areas);
        assert_eq!(s.total, 5);
        assert_eq!(s.active, 3);
        assert_eq!(s.inactive, 2);
        assert_eq!(s.circles, 2);
        assert_eq!(s.polygons, 1);
        assert_eq!(s.other, 2);
        assert_eq!(s.total, s.active + s.inactive);
        assert_eq!(s.total, s.circles + s.polygons + s.other);
    }
}
