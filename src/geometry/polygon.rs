use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{perimeter_2d, rotate_to_canonical_start, signed_area_2d};
use crate::math::Point2;

/// Rotational direction in which a polygon's vertices are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

/// An implicitly closed polygon: the last vertex connects back to the first.
///
/// No simplicity check is made here. Inside the offset pipeline a vertex
/// ring may cross itself until its loops are extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from vertices without validation.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Builds a polygon from raw `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewVertices` if fewer than 3 pairs are given
    /// - `GeometryError::NonFiniteCoordinate` if any coordinate is NaN or infinite
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        let polygon = Self {
            vertices: coords.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        };
        polygon.validate()?;
        Ok(polygon)
    }

    /// Checks the preconditions of the offset operation: at least 3
    /// vertices, all coordinates finite.
    ///
    /// # Errors
    ///
    /// See [`Polygon::from_coords`].
    pub fn validate(&self) -> Result<()> {
        if self.vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: self.vertices.len(),
            }
            .into());
        }
        if let Some((index, p)) = self
            .vertices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(GeometryError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }
        Ok(())
    }

    /// Returns the vertices as `(x, y)` pairs.
    #[must_use]
    pub fn to_coords(&self) -> Vec<(f64, f64)> {
        self.vertices.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Number of vertices (equal to the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// `true` when the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed shoelace area: positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Unsigned enclosed area (0 for fewer than 3 vertices).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// `true` when the signed area is negative.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }

    /// Winding of the vertex list. Zero-area rings report counter-clockwise.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.is_clockwise() {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Sum of edge lengths, closing edge included.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices)
    }

    /// Same vertices, opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
        }
    }

    /// Same ring, rotated to start at its leftmost-bottommost vertex.
    ///
    /// Two rings describe the same loop in the same winding exactly when
    /// their canonical forms match vertex for vertex.
    #[must_use]
    pub fn canonical(&self) -> Self {
        Self {
            vertices: rotate_to_canonical_start(&self.vertices),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MiterError;
    use approx::assert_abs_diff_eq;

    fn square_ccw() -> Polygon {
        Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]).unwrap()
    }

    #[test]
    fn area_and_orientation() {
        let sq = square_ccw();
        assert_abs_diff_eq!(sq.area(), 100.0);
        assert!(!sq.is_clockwise());
        assert_eq!(sq.orientation(), Orientation::CounterClockwise);

        let cw = sq.reversed();
        assert_abs_diff_eq!(cw.area(), 100.0);
        assert_abs_diff_eq!(cw.signed_area(), -100.0);
        assert!(cw.is_clockwise());
        assert_eq!(cw.orientation(), Orientation::Clockwise);
    }

    #[test]
    fn concave_area() {
        // U-shape: 9x9 block with a 3x6 notch.
        let u = Polygon::from_coords(&[
            (3.0, 12.0),
            (12.0, 12.0),
            (12.0, 3.0),
            (9.0, 3.0),
            (9.0, 9.0),
            (6.0, 9.0),
            (6.0, 3.0),
            (3.0, 3.0),
        ])
        .unwrap();
        assert_abs_diff_eq!(u.area(), 63.0);
        assert!(u.is_clockwise());
    }

    #[test]
    fn degenerate_ring_has_zero_area() {
        let two = Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_abs_diff_eq!(two.area(), 0.0);
        assert!(!two.is_clockwise());
    }

    #[test]
    fn from_coords_rejects_too_few_vertices() {
        let err = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            MiterError::Geometry(GeometryError::TooFewVertices { count: 2 })
        ));
    }

    #[test]
    fn from_coords_rejects_non_finite() {
        let err =
            Polygon::from_coords(&[(0.0, 0.0), (1.0, f64::NAN), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            MiterError::Geometry(GeometryError::NonFiniteCoordinate { index: 1, .. })
        ));
        assert!(Polygon::from_coords(&[(0.0, 0.0), (f64::INFINITY, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn coords_round_trip_order() {
        let sq = square_ccw();
        assert_eq!(sq.to_coords()[2], (10.0, 10.0));
        assert_eq!(sq.len(), 4);
        assert!(!sq.is_empty());
    }

    #[test]
    fn perimeter_and_canonical() {
        let sq = square_ccw();
        assert_abs_diff_eq!(sq.perimeter(), 40.0);
        let shifted = Polygon::new(vec![
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
        ]);
        assert_eq!(shifted.canonical(), sq);
    }
}
