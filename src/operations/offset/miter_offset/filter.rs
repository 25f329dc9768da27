use tracing::debug;

use crate::geometry::Polygon;
use crate::math::AREA_TOLERANCE;

/// Keeps the candidate loops that represent real offset material.
///
/// Slivers below [`AREA_TOLERANCE`] are always dropped. For a shrink
/// (`distance < 0`) a loop is also dropped when its winding differs from
/// the original's (an inverted artifact loop) or when it is larger than
/// the original (the offset passed through itself). Order is preserved.
#[must_use]
pub fn apply(candidates: Vec<Polygon>, original: &Polygon, distance: f64) -> Vec<Polygon> {
    let original_is_cw = original.is_clockwise();
    let original_area = original.area();
    let shrinking = distance < 0.0;

    candidates
        .into_iter()
        .filter(|candidate| {
            let area = candidate.area();
            if area < AREA_TOLERANCE {
                debug!(area, "discarding sliver loop");
                return false;
            }
            if shrinking {
                if candidate.is_clockwise() != original_is_cw {
                    debug!(area, "discarding inverted loop");
                    return false;
                }
                if area > original_area {
                    debug!(area, original_area, "discarding loop larger than original");
                    return false;
                }
            }
            true
        })
        .collect()
}
