use super::{Point2, POINT_TOLERANCE};

/// Computes the signed area of a closed vertex ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (x right, y up).
/// Rings with fewer than 3 vertices have zero area.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Total edge length of a closed vertex ring, closing edge included.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// `true` if `p` sorts before `q` in leftmost-then-bottommost order.
///
/// Coordinates within [`POINT_TOLERANCE`] count as equal, so rings that
/// differ only by rounding agree on their start vertex.
fn precedes(p: &Point2, q: &Point2) -> bool {
    if (p.x - q.x).abs() < POINT_TOLERANCE {
        p.y < q.y - POINT_TOLERANCE
    } else {
        p.x < q.x
    }
}

/// Rotates a closed ring to start at its leftmost-bottommost vertex.
///
/// The first such vertex in ring order wins when several coincide, as
/// crossing points do after injection.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    let mut ring = points.to_vec();
    let start = (0..ring.len()).reduce(|best, i| {
        if precedes(&ring[i], &ring[best]) {
            i
        } else {
            best
        }
    });
    if let Some(start) = start {
        ring.rotate_left(start);
    }
    ring
}
