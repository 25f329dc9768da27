use crate::math::vector_2d::{translate, unit_normal};
use crate::math::{Point2, DETERMINANT_TOLERANCE};

/// An infinite line in implicit form: `a·x + b·y = c`.
///
/// Coefficients are kept exactly as constructed. They are not normalized,
/// so two lines built from different point pairs on the same geometric
/// line generally differ by a scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates a line from raw coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Creates the line through `p1` and `p2`.
    ///
    /// Coincident points give `a = b = 0`, a degenerate line that
    /// intersects nothing.
    #[must_use]
    pub fn from_points(p1: &Point2, p2: &Point2) -> Self {
        let a = p1.y - p2.y;
        let b = p2.x - p1.x;
        let c = a * p1.x + b * p1.y;
        Self { a, b, c }
    }

    /// Creates the supporting line of edge `p1 → p2` pushed `distance`
    /// along the edge's left unit normal.
    ///
    /// Each endpoint is translated on its own before the line is built.
    #[must_use]
    pub fn from_offset_edge(p1: &Point2, p2: &Point2, distance: f64) -> Self {
        let n = unit_normal(p1, p2);
        let q1 = translate(p1, &n, distance);
        let q2 = translate(p2, &n, distance);
        Self::from_points(&q1, &q2)
    }

    /// Returns the `(a, b, c)` coefficients.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Intersects two lines by Cramer's rule.
    ///
    /// Returns `None` when the determinant is below
    /// [`DETERMINANT_TOLERANCE`] (parallel, coincident or degenerate lines).
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Option<Point2> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < DETERMINANT_TOLERANCE {
            return None;
        }
        let x = (self.c * other.b - self.b * other.c) / det;
        let y = (self.a * other.c - self.c * other.a) / det;
        Some(Point2::new(x, y))
    }
}
