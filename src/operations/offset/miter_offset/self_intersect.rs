use tracing::trace;

use crate::geometry::Line;
use crate::math::vector_2d::{is_on_segment, points_coincide};
use crate::math::Point2;

/// A proper crossing between two non-adjacent edges of a closed ring.
#[derive(Debug, Clone, Copy)]
pub struct Crossing {
    /// Index of the first edge (`seg_i → seg_i + 1`).
    pub seg_i: usize,
    /// Index of the second edge (always `>= seg_i + 2`).
    pub seg_j: usize,
    /// Crossing point.
    pub point: Point2,
}

/// Finds the first proper crossing between non-adjacent edges, scanning
/// edge pairs `(i, j)` with `i < j` in lexicographic order.
///
/// The first and last edges share a vertex and are never paired. A hit
/// counts only if it lies on both segments and coincides with none of the
/// four endpoints: touching at a vertex is not a crossing.
#[must_use]
pub fn find_first(points: &[Point2]) -> Option<Crossing> {
    let n = points.len();
    if n < 4 {
        return None;
    }

    for i in 0..n {
        let p1 = &points[i];
        let p2 = &points[(i + 1) % n];
        let edge_i = Line::from_points(p1, p2);

        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let p3 = &points[j];
            let p4 = &points[(j + 1) % n];

            let Some(hit) = edge_i.intersect(&Line::from_points(p3, p4)) else {
                continue;
            };
            if !is_on_segment(&hit, p1, p2) || !is_on_segment(&hit, p3, p4) {
                continue;
            }
            if [p1, p2, p3, p4].iter().any(|p| points_coincide(&hit, p)) {
                continue;
            }
            return Some(Crossing {
                seg_i: i,
                seg_j: j,
                point: hit,
            });
        }
    }
    None
}

/// Splits every proper self-crossing of a closed ring by inserting the
/// crossing point into both edges.
///
/// Runs to a fixed point: after each insertion the whole (longer) ring is
/// rescanned from the start, until no proper crossing is left. Each
/// crossing ends up in the ring twice; the pair marks where a loop can be
/// cut out.
#[must_use]
pub fn inject(points: Vec<Point2>) -> Vec<Point2> {
    let mut ring = points;

    while let Some(crossing) = find_first(&ring) {
        trace!(
            seg_i = crossing.seg_i,
            seg_j = crossing.seg_j,
            x = crossing.point.x,
            y = crossing.point.y,
            "injecting self-intersection"
        );
        // Higher index first keeps `seg_i + 1` valid.
        ring.insert(crossing.seg_j + 1, crossing.point);
        ring.insert(crossing.seg_i + 1, crossing.point);
    }

    ring
}
