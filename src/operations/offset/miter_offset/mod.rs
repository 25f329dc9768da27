mod extract;
mod filter;
mod raw_offset;
mod self_intersect;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::DETERMINANT_TOLERANCE;

/// Offsets a simple polygon by a signed distance using miter joins.
///
/// Every edge is pushed along its normal, consecutive offset edges are
/// re-joined at the intersection of their supporting lines, and any
/// self-crossing this introduces is resolved into separate loops.
///
/// # Algorithm
///
/// 1. **Raw offset**: one miter corner per vertex; parallel joins drop the vertex
/// 2. **Injection**: insert every proper self-crossing into both crossing edges
/// 3. **Extraction**: cut the ring at repeated points into candidate loops
/// 4. **Filter**: drop slivers and, when shrinking, inverted or oversized loops
///
/// # Sign Convention
///
/// - Positive distance: grow the enclosed area
/// - Negative distance: shrink it
///
/// The input winding does not matter.
#[derive(Debug)]
pub struct MiterOffset2D {
    polygon: Polygon,
    distance: f64,
}

impl MiterOffset2D {
    /// Creates a new miter offset operation.
    #[must_use]
    pub fn new(polygon: Polygon, distance: f64) -> Self {
        Self { polygon, distance }
    }

    /// Executes the offset.
    ///
    /// Returns zero or more polygons in discovery order. An empty result
    /// means the shape collapsed; more than one means it split. A zero
    /// distance returns the input unchanged.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewVertices` / `GeometryError::NonFiniteCoordinate`
    ///   if the polygon is malformed
    /// - `OperationError::InvalidInput` if the distance is not finite
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        self.polygon.validate()?;
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        if self.distance.abs() < DETERMINANT_TOLERANCE {
            return Ok(vec![self.polygon.clone()]);
        }

        // Left normals point outward on a clockwise ring, inward otherwise.
        let original_is_cw = self.polygon.is_clockwise();
        let side_distance = if original_is_cw {
            self.distance
        } else {
            -self.distance
        };
        debug!(
            vertices = self.polygon.len(),
            distance = self.distance,
            clockwise = original_is_cw,
            "miter offset"
        );

        let raw = raw_offset::build(&self.polygon.vertices, side_distance);
        let ring = self_intersect::inject(raw);
        let candidates = extract::loops(ring);
        let result = filter::apply(candidates, &self.polygon, self.distance);

        debug!(polygons = result.len(), "miter offset finished");
        Ok(result)
    }
}
