//! Restricted-area set, built once at startup and read-only afterwards.

use crate::geometry::{close_ring, ring_contains};
use crate::models::{Point, RestrictedAreaDef};

/// A named no-fly polygon with a closed ring.
#[derive(Debug, Clone)]
pub struct RestrictedArea {
    pub id: u32,
    pub name: String,
    ring: Vec<Point>,
}

impl RestrictedArea {
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    pub fn contains(&self, point: Point) -> bool {
        ring_contains(point, &self.ring)
    }
}

/// Immutable collection of restricted areas, iterated in ascending-id order.
#[derive(Debug, Clone, Default)]
pub struct GeofenceIndex {
    areas: Vec<RestrictedArea>,
}

impl GeofenceIndex {
    /// Build the index from raw configuration.
    ///
    /// Entries with non-finite coordinates or fewer than three distinct
    /// vertices are skipped, never fatal; the returned warnings describe each
    /// skipped entry so the caller can surface them.
    pub fn build(defs: Vec<RestrictedAreaDef>) -> (Self, Vec<String>) {
        let mut areas = Vec::new();
        let mut warnings = Vec::new();

        for def in defs {
            match area_from_def(def) {
                Ok(area) => areas.push(area),
                Err(warning) => warnings.push(warning),
            }
        }

        areas.sort_by_key(|a| a.id);
        (Self { areas }, warnings)
    }

    /// First polygon containing the point, in ascending-id order.
    ///
    /// When polygons overlap only the first match is reported; first-match-wins
    /// by iteration order is the contract, not "most specific match".
    pub fn find_containing(&self, point: Point) -> Option<&RestrictedArea> {
        self.areas.iter().find(|area| area.contains(point))
    }

    /// Direct lookup used to drive highlight feedback; no business logic.
    pub fn by_id(&self, id: u32) -> Option<&RestrictedArea> {
        self.areas.iter().find(|area| area.id == id)
    }

    pub fn areas(&self) -> &[RestrictedArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

fn area_from_def(def: RestrictedAreaDef) -> Result<RestrictedArea, String> {
    if def.vertices.iter().any(|v| !v.is_finite()) {
        return Err(format!(
            "restricted area {} ({}) skipped: non-finite vertex coordinates",
            def.id, def.name
        ));
    }

    let mut distinct: Vec<Point> = Vec::new();
    for vertex in &def.vertices {
        if !distinct.contains(vertex) {
            distinct.push(*vertex);
        }
    }
    if distinct.len() < 3 {
        return Err(format!(
            "restricted area {} ({}) skipped: fewer than 3 distinct vertices",
            def.id, def.name
        ));
    }

    Ok(RestrictedArea {
        id: def.id,
        name: def.name,
        ring: close_ring(def.vertices),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_def(id: u32, name: &str, base: f64) -> RestrictedAreaDef {
        RestrictedAreaDef {
            id,
            name: name.to_string(),
            vertices: vec![
                Point::new(base, base),
                Point::new(base, base + 10.0),
                Point::new(base + 10.0, base + 10.0),
                Point::new(base + 10.0, base),
            ],
        }
    }

    #[test]
    fn build_skips_invalid_entries_with_warnings() {
        let defs = vec![
            square_def(1, "Valid", 0.0),
            RestrictedAreaDef {
                id: 2,
                name: "Degenerate".to_string(),
                vertices: vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            },
            RestrictedAreaDef {
                id: 3,
                name: "Broken".to_string(),
                vertices: vec![
                    Point::new(f64::NAN, 0.0),
                    Point::new(0.0, 1.0),
                    Point::new(1.0, 1.0),
                ],
            },
        ];

        let (index, warnings) = GeofenceIndex::build(defs);
        assert_eq!(index.len(), 1);
        assert_eq!(warnings.len(), 2);
        assert!(index.by_id(1).is_some());
        assert!(index.by_id(2).is_none());
    }

    #[test]
    fn find_containing_reports_first_match_by_id() {
        // Two overlapping squares; id order decides the winner.
        let (index, warnings) =
            GeofenceIndex::build(vec![square_def(7, "Outer", 0.0), square_def(2, "Inner", 2.0)]);
        assert!(warnings.is_empty());

        let hit = index.find_containing(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(hit.id, 2);

        assert!(index.find_containing(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn by_id_looks_up_named_area() {
        let (index, _) = GeofenceIndex::build(vec![square_def(4, "George Square Area", 0.0)]);
        assert_eq!(index.by_id(4).unwrap().name, "George Square Area");
        assert!(index.by_id(9).is_none());
    }
}
