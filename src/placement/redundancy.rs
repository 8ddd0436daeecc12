//! Backup camera placement for zones watched by a single camera

use crate::core::types::Point;
use crate::venue::model::FloorPlan;

/// Mirror `primary` across `center`, keeping `margin` away from the floor edges
///
/// On floors narrower than twice the margin the result is pinned to the
/// margin and then clamped back onto the floor.
pub fn mirrored_position(center: Point, primary: Point, floor: &FloorPlan, margin: f64) -> Point {
    let mirrored = center - (primary - center);
    let inset = mirrored.clamp(margin, floor.width - margin, margin, floor.height - margin);
    let pinned = Point::new(inset.x.max(margin), inset.y.max(margin));
    floor.clamp(pinned)
}
