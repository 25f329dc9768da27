pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Spatial coincidence tolerance: points, collinearity and segment bounds.
pub const POINT_TOLERANCE: f64 = 1e-4;

/// Singularity tolerance for determinants and zero-length edges.
///
/// Kept separate from [`POINT_TOLERANCE`]: one measures distances, the
/// other the conditioning of a linear system.
pub const DETERMINANT_TOLERANCE: f64 = 1e-9;

/// Minimum area for a loop to count as a polygon rather than a sliver.
pub const AREA_TOLERANCE: f64 = 1e-4;
