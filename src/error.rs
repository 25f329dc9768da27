use thiserror::Error;

/// Top-level error type for miter offsetting.
#[derive(Debug, Error)]
pub enum MiterError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while building geometric entities from raw input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
}

/// Errors related to offset operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`MiterError`].
pub type Result<T> = std::result::Result<T, MiterError>;
