//! Plane geometry helpers: centroids, distances, view cones
//!
//! Pure functions over [`Point`]. Angles are degrees throughout; 0° points
//! along +x and angles grow towards +y.

use crate::core::types::Point;

/// Centroid returned for empty or malformed polygons when no other fallback is given
pub const DEFAULT_FALLBACK_CENTER: Point = Point { x: 500.0, y: 400.0 };

/// Arithmetic mean of a polygon's vertices
///
/// Empty input, or any vertex with a non-finite coordinate, yields
/// [`DEFAULT_FALLBACK_CENTER`].
pub fn centroid(points: &[Point]) -> Point {
    centroid_or(points, DEFAULT_FALLBACK_CENTER)
}

/// Arithmetic mean of a polygon's vertices, or `fallback` for degenerate input
pub fn centroid_or(points: &[Point], fallback: Point) -> Point {
    if points.is_empty() || points.iter().any(|p| !p.is_finite()) {
        return fallback;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sum_x / n, sum_y / n)
}

/// Euclidean distance
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(&b)
}

/// Normalize an angle into `(-180, 180]`
pub fn normalize_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Is `point` inside the view cone at `apex`?
///
/// The cone points along `rotation` and spans `±half_angle` around it,
/// out to `view_distance`. A point on the apex itself counts as inside.
pub fn in_cone(point: Point, apex: Point, view_distance: f64, half_angle: f64, rotation: f64) -> bool {
    let dist = distance(apex, point);
    if dist > view_distance {
        return false;
    }
    if dist == 0.0 {
        return true;
    }

    let bearing = (point.y - apex.y).atan2(point.x - apex.x).to_degrees();
    normalize_angle(bearing - rotation).abs() <= half_angle
}

/// Clamp a point into the floor rectangle `[0, width] × [0, height]`
pub fn clamp_to_bounds(point: Point, width: f64, height: f64) -> Point {
    point.clamp(0.0, width.max(0.0), 0.0, height.max(0.0))
}

/// Is `point` inside `[0, width] × [0, height]`?
pub fn within_bounds(point: Point, width: f64, height: f64) -> bool {
    point.x >= 0.0 && point.x <= width && point.y >= 0.0 && point.y <= height
}

/// Polygon approximating a camera's field of view
///
/// The apex comes first, followed by `segments + 1` points along the arc
/// from `rotation - view_angle / 2` to `rotation + view_angle / 2`.
pub fn fov_polygon(apex: Point, view_angle: f64, radius: f64, segments: usize, rotation: f64) -> Vec<Point> {
    let segments = segments.max(1);
    let step = view_angle / segments as f64;
    let start = rotation - view_angle / 2.0;

    let mut points = Vec::with_capacity(segments + 2);
    points.push(apex);
    for i in 0..=segments {
        let angle = (start + i as f64 * step).to_radians();
        points.push(Point::new(
            apex.x + angle.cos() * radius,
            apex.y + angle.sin() * radius,
        ));
    }
    points
}
