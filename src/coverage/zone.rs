//! Proximity-based zone coverage estimate
//!
//! A deliberately coarse signal, independent of the coverage grid: a camera
//! covers a zone in proportion to how far inside its range the zone's
//! centroid lies, ignoring where the camera is pointing. The grid and this
//! estimate can disagree about the same area.

use crate::core::types::Point;
use crate::spatial::geometry::distance;
use crate::venue::model::Camera;

/// Coverage score in `[0, 1]` for a zone centered at `center`
///
/// `max over cameras of max(0, 1 - distance / view_distance)`. Cameras
/// with a non-positive range contribute nothing.
pub fn zone_coverage(center: Point, cameras: &[Camera]) -> f64 {
    cameras
        .iter()
        .filter(|c| c.view_distance > 0.0)
        .map(|c| (1.0 - distance(c.position, center) / c.view_distance).clamp(0.0, 1.0))
        .fold(0.0, f64::max)
}

/// Is a zone with this score short of the threshold?
pub fn is_under_covered(score: f64, threshold: f64) -> bool {
    score < threshold
}

/// Cameras within `radius` of a zone centroid, in input order
pub fn cameras_near<'a>(center: Point, cameras: &'a [Camera], radius: f64) -> Vec<&'a Camera> {
    cameras
        .iter()
        .filter(|c| distance(c.position, center) <= radius)
        .collect()
}
