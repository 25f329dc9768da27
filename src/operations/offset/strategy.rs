use crate::error::Result;
use crate::geometry::Polygon;

use super::MiterOffset2D;

/// A polygon offsetting algorithm.
pub trait OffsetStrategy {
    /// Offsets `polygon` by `distance` (positive grows, negative shrinks).
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon or distance violates the strategy's
    /// preconditions. Collapse is an empty `Ok`, never an error.
    fn apply(&self, polygon: &Polygon, distance: f64) -> Result<Vec<Polygon>>;
}

/// Sharp-cornered offsetting via [`MiterOffset2D`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MiterOffsetStrategy;

impl OffsetStrategy for MiterOffsetStrategy {
    fn apply(&self, polygon: &Polygon, distance: f64) -> Result<Vec<Polygon>> {
        MiterOffset2D::new(polygon.clone(), distance).execute()
    }
}

/// Entry point for callers holding raw coordinates.
#[derive(Debug, Clone, Default)]
pub struct OffsetService<S: OffsetStrategy> {
    strategy: S,
}

impl<S: OffsetStrategy> OffsetService<S> {
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Builds a polygon from `(x, y)` pairs and offsets it.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError` for malformed coordinates, or whatever the
    /// strategy reports.
    pub fn offset_polygon(&self, coords: &[(f64, f64)], distance: f64) -> Result<Vec<Polygon>> {
        let polygon = Polygon::from_coords(coords)?;
        self.strategy.apply(&polygon, distance)
    }
}

/// Miter-offsets the polygon given by `vertices` by `distance`.
///
/// Returns the resulting polygons as `(x, y)` lists. The list may be empty
/// (the polygon vanished) or hold several polygons (it split).
///
/// # Errors
///
/// Fails on fewer than 3 vertices or on non-finite input.
pub fn offset(vertices: &[(f64, f64)], distance: f64) -> Result<Vec<Vec<(f64, f64)>>> {
    let polygons = OffsetService::new(MiterOffsetStrategy).offset_polygon(vertices, distance)?;
    Ok(polygons.iter().map(Polygon::to_coords).collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, MiterError};

    /// Strategy that returns its input, to check the service plumbing.
    struct Identity;

    impl OffsetStrategy for Identity {
        fn apply(&self, polygon: &Polygon, _distance: f64) -> Result<Vec<Polygon>> {
            Ok(vec![polygon.clone()])
        }
    }

    #[test]
    fn service_delegates_to_strategy() {
        let coords = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        let result = OffsetService::new(Identity)
            .offset_polygon(&coords, 3.0)
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_coords(), coords.to_vec());
    }

    #[test]
    fn service_rejects_malformed_coords() {
        let err = OffsetService::new(MiterOffsetStrategy)
            .offset_polygon(&[(0.0, 0.0), (1.0, 1.0)], 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            MiterError::Geometry(GeometryError::TooFewVertices { .. })
        ));
    }

    #[test]
    fn offset_returns_plain_coordinates() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let result = offset(&square, -1.0).unwrap();
        assert_eq!(result.len(), 1);
        let expected = [(1.0, 1.0), (9.0, 1.0), (9.0, 9.0), (1.0, 9.0)];
        for (&(x, y), &(ex, ey)) in result[0].iter().zip(&expected) {
            assert!((x - ex).abs() < 1e-9 && (y - ey).abs() < 1e-9);
        }
    }

    #[test]
    fn offset_collapse_is_empty_not_error() {
        let square = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
        assert!(offset(&square, -5.0).unwrap().is_empty());
    }

    #[test]
    fn offset_zero_is_identity() {
        let tri = [(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
        assert_eq!(offset(&tri, 0.0).unwrap(), vec![tri.to_vec()]);
    }

    #[test]
    fn miter_strategy_through_trait_object() {
        let strategy: Box<dyn OffsetStrategy> = Box::new(MiterOffsetStrategy);
        let poly = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap();
        let grown = strategy.apply(&poly, 0.5).unwrap();
        assert_eq!(grown.len(), 1);
        assert!((grown[0].area() - 25.0).abs() < 1e-9);
    }
}
