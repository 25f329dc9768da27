use tracing::trace;

use crate::geometry::Line;
use crate::math::Point2;

/// Builds the raw miter ring: one corner per input vertex, where the offset
/// lines of its two adjacent edges meet.
///
/// `distance` is applied along each edge's left normal. A vertex whose
/// offset edges are parallel (collinear input edges, or a zero-length
/// neighbor edge) has no miter point and is left out, so the ring can be
/// shorter than the input. It may also cross itself.
#[must_use]
pub fn build(vertices: &[Point2], distance: f64) -> Vec<Point2> {
    let n = vertices.len();
    let mut raw = Vec::with_capacity(n);

    for i in 0..n {
        let prev = &vertices[(i + n - 1) % n];
        let curr = &vertices[i];
        let next = &vertices[(i + 1) % n];

        let incoming = Line::from_offset_edge(prev, curr, distance);
        let outgoing = Line::from_offset_edge(curr, next, distance);

        match incoming.intersect(&outgoing) {
            Some(corner) => raw.push(corner),
            None => {
                trace!(vertex = i, "parallel offset edges, vertex dropped");
            }
        }
    }

    raw
}
