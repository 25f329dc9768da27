pub mod line;
pub mod polygon;

pub use line::Line;
pub use polygon::{Orientation, Polygon};
