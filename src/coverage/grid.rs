//! Coverage grid: which parts of the floor some camera can see
//!
//! The floor is discretized into a fixed `size × size` grid. A cell is
//! covered when its center lies inside at least one camera's view cone.

use crate::core::types::Point;
use crate::spatial::geometry::in_cone;
use crate::spatial::grid::Grid;
use crate::venue::model::{Camera, FloorPlan};

/// Boolean union of every camera's coverage over the floor
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageGrid {
    cells: Grid<bool>,
    floor: FloorPlan,
}

impl CoverageGrid {
    /// Empty (fully uncovered) grid
    pub fn new(size: usize, floor: FloorPlan) -> Self {
        Self {
            cells: Grid::new(size, size, floor.width, floor.height),
            floor,
        }
    }

    /// Build the grid for a set of cameras
    ///
    /// Cameras with a zero-width or zero-range cone contribute nothing.
    pub fn build(cameras: &[Camera], floor: FloorPlan, size: usize) -> Self {
        let mut grid = Self::new(size, floor);
        for camera in cameras {
            if !camera.has_field_of_view() {
                tracing::debug!("Camera {} has no field of view; skipping", camera.id);
                continue;
            }
            grid.mark_camera(camera);
        }
        grid
    }

    /// Grid covered by a single camera
    pub fn for_camera(camera: &Camera, floor: FloorPlan, size: usize) -> Self {
        Self::build(std::slice::from_ref(camera), floor, size)
    }

    /// Grid with coverage given by `covered(col, row)`
    pub fn from_fn(size: usize, floor: FloorPlan, covered: impl Fn(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(size, floor);
        for row in 0..size {
            for col in 0..size {
                grid.cells.set(col, row, covered(col, row));
            }
        }
        grid
    }

    fn mark_camera(&mut self, camera: &Camera) {
        let half_angle = camera.half_angle();
        for row in 0..self.cells.rows {
            for col in 0..self.cells.cols {
                let center = self.cells.cell_center(col, row);
                if in_cone(center, camera.position, camera.view_distance, half_angle, camera.rotation) {
                    self.cells.set(col, row, true);
                }
            }
        }
    }

    /// Cells along each axis
    pub fn size(&self) -> usize {
        self.cells.cols
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn floor(&self) -> FloorPlan {
        self.floor
    }

    pub fn is_covered(&self, col: usize, row: usize) -> bool {
        self.cells.get(col, row).copied().unwrap_or(false)
    }

    pub fn covered_cells(&self) -> usize {
        self.cells.count(|c| *c)
    }

    pub fn uncovered_cells(&self) -> usize {
        self.total_cells() - self.covered_cells()
    }

    /// Fraction of cells covered, 0 for an empty grid
    pub fn covered_fraction(&self) -> f64 {
        if self.total_cells() == 0 {
            0.0
        } else {
            self.covered_cells() as f64 / self.total_cells() as f64
        }
    }

    pub fn cell_center(&self, col: usize, row: usize) -> Point {
        self.cells.cell_center(col, row)
    }

    /// Underlying cell storage
    pub fn cells(&self) -> &Grid<bool> {
        &self.cells
    }
}
