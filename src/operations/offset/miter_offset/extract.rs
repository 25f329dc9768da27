use tracing::trace;

use crate::geometry::Polygon;
use crate::math::vector_2d::points_coincide;
use crate::math::{Point2, AREA_TOLERANCE};

/// Finds the first vertex that reappears later in the ring.
///
/// Returns `(i, j)` with `i < j` and `points[i]` coinciding with
/// `points[j]`, minimizing `i` first and then `j`.
fn find_first_repeat(points: &[Point2]) -> Option<(usize, usize)> {
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if points_coincide(&points[i], &points[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Cuts a ring carrying duplicated crossing points into candidate loops.
///
/// While a repeated vertex exists, the span from its first occurrence up
/// to (not including) its second is emitted as a loop and spliced out, so
/// the ring continues from the second occurrence. Whatever remains once
/// no vertex repeats is the last loop. Loops with area at or below
/// [`AREA_TOLERANCE`] are dropped. Candidates come out in discovery order.
#[must_use]
pub fn loops(points: Vec<Point2>) -> Vec<Polygon> {
    let mut remaining = points;
    let mut candidates = Vec::new();

    while remaining.len() >= 3 {
        let Some((i, j)) = find_first_repeat(&remaining) else {
            let last = Polygon::new(remaining);
            if last.area() > AREA_TOLERANCE {
                trace!(vertices = last.len(), area = last.area(), "extracted final loop");
                candidates.push(last);
            }
            break;
        };

        let loop_poly = Polygon::new(remaining.drain(i..j).collect());
        if loop_poly.area() > AREA_TOLERANCE {
            trace!(
                vertices = loop_poly.len(),
                area = loop_poly.area(),
                "extracted loop"
            );
            candidates.push(loop_poly);
        }
    }

    candidates
}
