//! Blind-spot detection over the coverage grid
//!
//! Uncovered cells are grouped into 4-connected components with a
//! breadth-first flood fill. Components at or below the minimum cell count
//! are treated as discretization noise and dropped; the rest are converted
//! to floor coordinates and square meters.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::CoverageGrid;
use crate::core::config::EngineConfig;
use crate::core::types::{CameraId, Point};
use crate::spatial::geometry::distance;
use crate::spatial::grid::Grid;
use crate::venue::model::Camera;

/// Contiguous uncovered region of the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlindSpot {
    /// Centroid of the region in floor-plan units
    pub position: Point,
    pub size_sq_meters: f64,
    pub cell_count: usize,
    /// Closest installed camera to the centroid, if any
    pub nearby_camera_id: Option<CameraId>,
}

/// Flood-fill detector parameters
#[derive(Debug, Clone, Copy)]
pub struct BlindSpotDetector {
    /// Components must have strictly more cells than this
    pub min_cells: usize,
    /// Plan-unit² per square meter
    pub unit_conversion_factor: f64,
}

impl BlindSpotDetector {
    pub fn new(min_cells: usize, unit_conversion_factor: f64) -> Self {
        Self {
            min_cells,
            unit_conversion_factor,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.min_blind_spot_cells, config.unit_conversion_factor)
    }

    /// Find blind spots, largest first
    pub fn detect(&self, grid: &CoverageGrid, cameras: &[Camera]) -> Vec<BlindSpot> {
        let size = grid.size();
        let total = grid.total_cells();
        if total == 0 {
            return Vec::new();
        }

        let floor = grid.floor();
        let floor_sq_meters = floor.area() / self.unit_conversion_factor;
        let mut visited: Grid<bool> = Grid::new(size, size, floor.width, floor.height);
        let mut spots = Vec::new();

        for row in 0..size {
            for col in 0..size {
                if grid.is_covered(col, row) || visited.get(col, row).copied().unwrap_or(true) {
                    continue;
                }

                let component = Self::flood_fill(grid, &mut visited, (col, row));
                if component.len() <= self.min_cells {
                    continue;
                }

                let n = component.len() as f64;
                // Mean of cell centers, matching the cell-center coverage test
                let (sum_c, sum_r) = component
                    .iter()
                    .fold((0.0, 0.0), |(sc, sr), &(c, r)| (sc + c as f64 + 0.5, sr + r as f64 + 0.5));
                let position = floor.clamp(grid.cells().grid_to_world(sum_c / n, sum_r / n));

                spots.push(BlindSpot {
                    position,
                    size_sq_meters: (n / total as f64) * floor_sq_meters,
                    cell_count: component.len(),
                    nearby_camera_id: nearest_camera(position, cameras),
                });
            }
        }

        // Stable: equal sizes keep scan order
        spots.sort_by(|a, b| b.size_sq_meters.total_cmp(&a.size_sq_meters));
        spots
    }

    /// Collect the uncovered component containing `start`, marking it visited
    fn flood_fill(
        grid: &CoverageGrid,
        visited: &mut Grid<bool>,
        start: (usize, usize),
    ) -> Vec<(usize, usize)> {
        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited.set(start.0, start.1, true);

        while let Some((col, row)) = queue.pop_front() {
            component.push((col, row));

            for (nc, nr) in grid.cells().neighbors4(col, row) {
                if !grid.is_covered(nc, nr) && !visited.get(nc, nr).copied().unwrap_or(true) {
                    visited.set(nc, nr, true);
                    queue.push_back((nc, nr));
                }
            }
        }

        component
    }
}

fn nearest_camera(position: Point, cameras: &[Camera]) -> Option<CameraId> {
    cameras
        .iter()
        .min_by(|a, b| {
            distance(a.position, position).total_cmp(&distance(b.position, position))
        })
        .map(|c| c.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::model::FloorPlan;

    fn floor() -> FloorPlan {
        FloorPlan::new(1000.0, 800.0)
    }

    #[test]
    fn test_all_uncovered_is_one_floor_sized_spot() {
        let grid = CoverageGrid::new(20, floor());
        let spots = BlindSpotDetector::new(4, 1.0).detect(&grid, &[]);
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].cell_count, 400);
        assert!((spots[0].size_sq_meters - 800_000.0).abs() < 1e-6);
        assert_eq!(spots[0].position, Point::new(500.0, 400.0));
        assert_eq!(spots[0].nearby_camera_id, None);
    }

    #[test]
    fn test_unit_conversion() {
        let grid = CoverageGrid::new(20, floor());
        let spots = BlindSpotDetector::new(4, 1_000_000.0).detect(&grid, &[]);
        assert!((spots[0].size_sq_meters - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_all_covered_has_no_spots() {
        let grid = CoverageGrid::from_fn(20, floor(), |_, _| true);
        assert!(BlindSpotDetector::new(4, 1.0).detect(&grid, &[]).is_empty());
    }

    #[test]
    fn test_small_components_filtered() {
        // Covered everywhere except a 2x2 hole (4 cells) and a 1x5 strip (5 cells)
        let grid = CoverageGrid::from_fn(10, floor(), |col, row| {
            let hole = (1..=2).contains(&col) && (1..=2).contains(&row);
            let strip = row == 7 && (2..=6).contains(&col);
            !(hole || strip)
        });
        let spots = BlindSpotDetector::new(4, 1.0).detect(&grid, &[]);
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].cell_count, 5);
        // Strip centroid: col 4.5 of 10 → x 450, row 7.5 of 10 → y 600
        assert_eq!(spots[0].position, Point::new(450.0, 600.0));
    }

    #[test]
    fn test_diagonal_cells_are_not_connected() {
        let grid = CoverageGrid::from_fn(6, floor(), |col, row| col != row);
        assert!(BlindSpotDetector::new(0, 1.0)
            .detect(&grid, &[])
            .iter()
            .all(|s| s.cell_count == 1));
    }

    #[test]
    fn test_sorted_largest_first_with_nearest_camera() {
        // Left column strip (10 cells) and right block of 3 columns (30 cells)
        let grid = CoverageGrid::from_fn(10, floor(), |col, _| !(col == 0 || col >= 7));
        let cameras = [
            Camera::new("west", Point::new(0.0, 400.0), 60.0, 10.0, 0.0),
            Camera::new("east", Point::new(1000.0, 400.0), 60.0, 10.0, 180.0),
        ];
        let spots = BlindSpotDetector::new(4, 1.0).detect(&grid, &cameras);
        assert_eq!(spots.len(), 2);
        assert_eq!(spots[0].cell_count, 30);
        assert_eq!(spots[0].nearby_camera_id.as_deref(), Some("east"));
        assert_eq!(spots[1].nearby_camera_id.as_deref(), Some("west"));
        assert!(spots[0].size_sq_meters > spots[1].size_sq_meters);
    }
}
