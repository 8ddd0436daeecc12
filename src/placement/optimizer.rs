//! New-camera placement for an under-covered zone
//!
//! Four candidates sit diagonally around the zone centroid. Each is scored
//! by closeness to the zone (capped) plus distance from every existing
//! camera (each capped), so the winner is near the zone but away from
//! cameras that already watch the area.

use crate::core::config::EngineConfig;
use crate::core::types::Point;
use crate::spatial::geometry::distance;
use crate::venue::model::{Camera, FloorPlan};

#[derive(Debug, Clone, Copy)]
pub struct PlacementOptimizer {
    /// Per-axis offset of each candidate from the zone centroid
    pub candidate_offset: f64,
    /// Proximity term is `max(0, cap - distance to centroid)`
    pub proximity_cap: f64,
    /// Each camera adds `min(cap, distance to camera)`
    pub separation_cap: f64,
}

impl PlacementOptimizer {
    pub fn new(candidate_offset: f64, proximity_cap: f64, separation_cap: f64) -> Self {
        Self {
            candidate_offset,
            proximity_cap,
            separation_cap,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.candidate_offset,
            config.proximity_score_cap,
            config.camera_separation_cap,
        )
    }

    /// Candidates in generation order: top-left, top-right, bottom-left, bottom-right
    pub fn candidates(&self, center: Point) -> [Point; 4] {
        let d = self.candidate_offset;
        [
            Point::new(center.x - d, center.y - d),
            Point::new(center.x + d, center.y - d),
            Point::new(center.x - d, center.y + d),
            Point::new(center.x + d, center.y + d),
        ]
    }

    pub fn score(&self, candidate: Point, center: Point, cameras: &[Camera]) -> f64 {
        let proximity = (self.proximity_cap - distance(candidate, center)).max(0.0);
        let separation: f64 = cameras
            .iter()
            .map(|c| distance(candidate, c.position).min(self.separation_cap))
            .sum();
        proximity + separation
    }

    /// Highest-scoring in-bounds candidate
    ///
    /// Ties go to the earlier candidate. When no candidate is on the floor
    /// the first candidate is returned unclamped.
    pub fn best_position(&self, center: Point, cameras: &[Camera], floor: &FloorPlan) -> Point {
        let candidates = self.candidates(center);
        let mut best: Option<(Point, f64)> = None;

        for candidate in candidates {
            if !floor.contains(candidate) {
                continue;
            }
            let score = self.score(candidate, center, cameras);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((position, _)) => position,
            None => {
                tracing::debug!(
                    "No placement candidate around ({:.1}, {:.1}) is on the floor",
                    center.x,
                    center.y
                );
                candidates[0]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimizer() -> PlacementOptimizer {
        PlacementOptimizer::from_config(&EngineConfig::default())
    }

    fn floor() -> FloorPlan {
        FloorPlan::new(1000.0, 800.0)
    }

    #[test]
    fn test_no_cameras_picks_first_in_bounds() {
        let pos = optimizer().best_position(Point::new(500.0, 400.0), &[], &floor());
        assert_eq!(pos, Point::new(400.0, 300.0));
    }

    #[test]
    fn test_out_of_bounds_candidates_skipped() {
        // Zone in the bottom-right corner: only the top-left candidate fits
        let pos = optimizer().best_position(Point::new(950.0, 750.0), &[], &floor());
        assert_eq!(pos, Point::new(850.0, 650.0));

        // Near the left edge: left candidates fall off the floor
        let pos = optimizer().best_position(Point::new(50.0, 400.0), &[], &floor());
        assert_eq!(pos, Point::new(150.0, 300.0));
    }

    #[test]
    fn test_prefers_distance_from_existing_camera() {
        let cameras = [Camera::new("c", Point::new(400.0, 300.0), 60.0, 10.0, 0.0)];
        let pos = optimizer().best_position(Point::new(500.0, 400.0), &cameras, &floor());
        // The top-left candidate sits on the camera; the others score the full separation cap
        assert_eq!(pos, Point::new(600.0, 300.0));
    }

    #[test]
    fn test_score_terms() {
        let opt = optimizer();
        let center = Point::new(0.0, 0.0);
        let cam = Camera::new("c", Point::new(0.0, 50.0), 60.0, 10.0, 0.0);
        // proximity 200 - 0 = 200, separation min(100, 50) = 50
        assert_eq!(opt.score(center, center, &[cam]), 250.0);
        // Far candidate: proximity floor at 0
        assert_eq!(opt.score(Point::new(300.0, 0.0), center, &[]), 0.0);
    }

    #[test]
    fn test_tiny_floor_falls_back_to_first_candidate() {
        let tiny = FloorPlan::new(50.0, 50.0);
        let pos = optimizer().best_position(Point::new(25.0, 25.0), &[], &tiny);
        assert_eq!(pos, Point::new(-75.0, -75.0));
    }
}
