//! Ring primitives for restricted-area containment.

use crate::models::Point;

/// Close a polygon ring by repeating the first point at the end when the last
/// point does not already equal it (exact value equality, no epsilon).
/// Idempotent on already-closed input.
pub fn close_ring(mut ring: Vec<Point>) -> Vec<Point> {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last {
            ring.push(first);
        }
    }
    ring
}

/// Even-odd ray-casting containment test.
///
/// For each edge, a crossing is counted when the point's latitude lies in the
/// edge's half-open latitude interval (one endpoint strictly above, the other
/// at-or-below) and the point's longitude is west of the edge's intercept at
/// that latitude. The half-open comparison excludes horizontal edges, so the
/// intercept division is never by zero.
///
/// Points exactly on an edge have implementation-defined containment; the
/// even-odd ray cast is inherently boundary-ambiguous.
pub fn ring_contains(point: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let yi = ring[i].lat;
        let xi = ring[i].lng;
        let yj = ring[j].lat;
        let xj = ring[j].lng;

        if ((yi > point.lat) != (yj > point.lat))
            && point.lng < (xj - xi) * (point.lat - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        close_ring(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ])
    }

    #[test]
    fn contains_center_of_square() {
        assert!(ring_contains(Point::new(5.0, 5.0), &square()));
    }

    #[test]
    fn excludes_point_outside_square() {
        assert!(!ring_contains(Point::new(15.0, 15.0), &square()));
    }

    #[test]
    fn containment_invariant_to_starting_vertex() {
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        let inside = Point::new(5.0, 5.0);
        let outside = Point::new(15.0, 15.0);

        for rotation in 0..vertices.len() {
            let mut rotated = vertices.clone();
            rotated.rotate_left(rotation);
            let ring = close_ring(rotated);
            assert!(ring_contains(inside, &ring), "rotation {rotation}");
            assert!(!ring_contains(outside, &ring), "rotation {rotation}");
        }
    }

    #[test]
    fn close_ring_appends_first_point() {
        let open = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let closed = close_ring(open.clone());
        assert_eq!(closed.len(), open.len() + 1);
        assert_eq!(closed.first(), closed.last());
    }

    #[test]
    fn close_ring_is_idempotent() {
        let closed = close_ring(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(close_ring(closed.clone()), closed);
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let line = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert!(!ring_contains(Point::new(0.5, 0.5), &line));
    }
}
