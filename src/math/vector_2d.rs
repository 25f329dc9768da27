use super::{Point2, Vector2, DETERMINANT_TOLERANCE, POINT_TOLERANCE};

/// Returns the unit normal of the directed edge `p1 → p2`, rotated +90°.
///
/// For `d = p2 - p1` this is `(-d.y, d.x) / |d|`, the left-hand side when
/// walking from `p1` to `p2`. A zero-length edge yields the zero vector,
/// so offsetting that edge is a no-op.
#[must_use]
pub fn unit_normal(p1: &Point2, p2: &Point2) -> Vector2 {
    let d = p2 - p1;
    let len = d.norm();
    if len < DETERMINANT_TOLERANCE {
        return Vector2::zeros();
    }
    Vector2::new(-d.y / len, d.x / len)
}

/// Moves `p` by `dir * amount`.
#[must_use]
pub fn translate(p: &Point2, dir: &Vector2, amount: f64) -> Point2 {
    p + dir * amount
}

/// Z component of `(b - a) × (p - a)`.
#[must_use]
pub fn cross_2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Tolerance-based "same location" test.
///
/// Not transitive: a chain of points each within tolerance of the next
/// can drift arbitrarily far.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < POINT_TOLERANCE && (a.y - b.y).abs() < POINT_TOLERANCE
}

/// Returns `true` if `p` lies on segment `a–b`.
///
/// The point must be collinear with the segment (unnormalized cross
/// product below [`POINT_TOLERANCE`]) and inside its bounding box grown by
/// [`POINT_TOLERANCE`] on every side.
#[must_use]
pub fn is_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    if cross_2d(a, b, p).abs() >= POINT_TOLERANCE {
        return false;
    }
    let eps = POINT_TOLERANCE;
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unit_normal_points_left() {
        let n = unit_normal(&Point2::new(0.0, 0.0), &Point2::new(3.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0);
        assert_abs_diff_eq!(n.y, 1.0);

        let n = unit_normal(&Point2::new(1.0, 1.0), &Point2::new(4.0, 5.0));
        assert_abs_diff_eq!(n.x, -0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(n.y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn unit_normal_of_degenerate_edge_is_zero() {
        let p = Point2::new(2.0, 2.0);
        let n = unit_normal(&p, &Point2::new(2.0, 2.0 + 1e-12));
        assert_eq!(n, Vector2::zeros());
    }

    #[test]
    fn translate_scales_direction() {
        let p = translate(&Point2::new(1.0, 2.0), &Vector2::new(0.0, -1.0), 2.5);
        assert_abs_diff_eq!(p.x, 1.0);
        assert_abs_diff_eq!(p.y, -0.5);
    }

    #[test]
    fn coincide_within_tolerance() {
        let a = Point2::new(1.0, 1.0);
        assert!(points_coincide(&a, &Point2::new(1.0 + 5e-5, 1.0 - 5e-5)));
        assert!(!points_coincide(&a, &Point2::new(1.0 + 2e-4, 1.0)));
        assert!(!points_coincide(&a, &Point2::new(1.0, 0.9)));
    }

    #[test]
    fn on_segment_interior_and_endpoints() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 4.0);
        assert!(is_on_segment(&Point2::new(2.0, 2.0), &a, &b));
        assert!(is_on_segment(&a, &a, &b));
        assert!(is_on_segment(&b, &a, &b));
    }

    #[test]
    fn on_segment_rejects_off_line_and_beyond_ends() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        assert!(!is_on_segment(&Point2::new(2.0, 0.1), &a, &b));
        assert!(!is_on_segment(&Point2::new(4.5, 0.0), &a, &b));
        assert!(!is_on_segment(&Point2::new(-0.01, 0.0), &a, &b));
        // Bounding box is grown by the point tolerance.
        assert!(is_on_segment(&Point2::new(4.0 + 5e-5, 0.0), &a, &b));
    }
}
