//! Overall coverage summary for a floor plan

use serde::{Deserialize, Serialize};

use super::blind_spot::{BlindSpot, BlindSpotDetector};
use super::grid::CoverageGrid;
use crate::core::config::EngineConfig;
use crate::core::types::CameraId;
use crate::venue::model::{Camera, FloorPlan};

/// Qualitative coverage grade shown next to the percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CoverageRating {
    /// Grade a coverage percentage (0-100)
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            CoverageRating::Excellent
        } else if percentage >= 60.0 {
            CoverageRating::Good
        } else if percentage >= 40.0 {
            CoverageRating::Fair
        } else {
            CoverageRating::Poor
        }
    }
}

/// Share of the floor a single camera sees on its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCoverage {
    pub camera_id: CameraId,
    pub percentage: f64,
    pub area_sq_meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    pub coverage_percentage: f64,
    pub covered_area_sq_meters: f64,
    pub total_area_sq_meters: f64,
    pub rating: CoverageRating,
    pub cameras: Vec<CameraCoverage>,
    /// Every blind spot, largest first (not capped like recommendations)
    pub uncovered_areas: Vec<BlindSpot>,
}

impl CoverageReport {
    /// Summarize coverage of `floor` by `cameras`
    pub fn build(floor: FloorPlan, cameras: &[Camera], config: &EngineConfig) -> Self {
        let grid = CoverageGrid::build(cameras, floor, config.grid_size);
        Self::from_grid(&grid, cameras, config)
    }

    /// Summarize an already-built grid
    pub fn from_grid(grid: &CoverageGrid, cameras: &[Camera], config: &EngineConfig) -> Self {
        let floor = grid.floor();
        let total_area = floor.area() / config.unit_conversion_factor;
        let fraction = grid.covered_fraction();

        let per_camera = cameras
            .iter()
            .map(|camera| {
                let own = CoverageGrid::for_camera(camera, floor, config.grid_size).covered_fraction();
                CameraCoverage {
                    camera_id: camera.id.clone(),
                    percentage: own * 100.0,
                    area_sq_meters: own * total_area,
                }
            })
            .collect();

        Self {
            coverage_percentage: fraction * 100.0,
            covered_area_sq_meters: fraction * total_area,
            total_area_sq_meters: total_area,
            rating: CoverageRating::from_percentage(fraction * 100.0),
            cameras: per_camera,
            uncovered_areas: BlindSpotDetector::from_config(config).detect(grid, cameras),
        }
    }
}
