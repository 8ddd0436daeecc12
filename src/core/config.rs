//! Engine configuration with documented policy constants
//!
//! Every threshold, cost and geometric constant the recommendation engine
//! uses is collected here. The defaults match the values the venue platform
//! has always shipped with; none of them is a hard invariant.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CoverageError, Result};
use super::types::Point;

/// Configuration for the coverage and placement engine
///
/// Loaded from TOML where every field is optional; missing fields keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === COVERAGE GRID ===
    /// Number of cells along each axis of the coverage grid
    ///
    /// The grid is square in cells (20 → 400 cells) but each cell is
    /// stretched to the floor plan's aspect ratio.
    pub grid_size: usize,

    // === INPUT DEFAULTS ===
    /// Field-of-view width (degrees) for cameras that do not report one
    pub default_view_angle: f64,

    /// Sensing range (plan units) for cameras that do not report one
    pub default_view_distance: f64,

    /// Facing direction (degrees) for cameras that do not report one
    pub default_rotation: f64,

    /// Centroid used for zones whose polygon is empty or malformed
    pub fallback_center: Point,

    /// Floor width used when the floor plan carries no usable width
    pub default_floor_width: f64,

    /// Floor height used when the floor plan carries no usable height
    pub default_floor_height: f64,

    // === ZONE COVERAGE ===
    /// Proximity score below which a critical zone is under-covered
    pub zone_coverage_threshold: f64,

    /// Coverage a new camera is expected to bring a zone to
    ///
    /// Only used to report `expectedImprovement` in recommendation metadata.
    pub target_zone_coverage: f64,

    // === BLIND SPOTS ===
    /// A gap must contain strictly more cells than this to be reported
    pub min_blind_spot_cells: usize,

    /// How many of the largest blind spots become recommendations
    pub max_blind_spot_recommendations: usize,

    /// Blind spots larger than this (m²) are HIGH priority, others MEDIUM
    pub high_priority_blind_spot_sq_meters: f64,

    /// Plan-unit² per square meter
    ///
    /// The reference floor plans are drawn in millimetre-scale units, so
    /// one square meter is 1,000,000 plan-unit².
    pub unit_conversion_factor: f64,

    /// Run blind-spot detection even when no camera has a usable field of view
    ///
    /// Off by default: a venue with no working camera would report its whole
    /// floor as one blind spot, which the zone recommendations already
    /// address more usefully. Installed cameras that merely miss every cell
    /// center still get blind-spot recommendations.
    pub report_blind_spots_without_cameras: bool,

    // === PLACEMENT ===
    /// Offset (plan units, each axis) of the four candidates around a zone
    pub candidate_offset: f64,

    /// Cap on the proximity-to-zone term of the candidate score
    pub proximity_score_cap: f64,

    /// Cap on each existing camera's separation term of the candidate score
    pub camera_separation_cap: f64,

    // === REDUNDANCY ===
    /// A camera within this radius of a zone centroid covers the zone
    pub redundancy_radius: f64,

    /// Minimum distance of a backup position from every floor edge
    pub redundancy_margin: f64,

    // === FIELD OF VIEW POLYGON ===
    /// Cone width (degrees) of the coverage-area polygon in recommendations
    pub fov_angle: f64,

    /// Radius (plan units) of the coverage-area polygon in recommendations
    pub fov_radius: f64,

    /// Number of arc segments in the coverage-area polygon
    pub fov_segments: usize,

    // === COSTS ===
    /// Estimated cost of a camera for an under-covered zone
    pub zone_camera_cost: f64,

    /// Estimated cost of a camera for a blind spot
    pub blind_spot_camera_cost: f64,

    /// Estimated cost of a backup camera
    pub redundancy_camera_cost: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,

            default_view_angle: 60.0,
            default_view_distance: 10.0,
            default_rotation: 0.0,
            fallback_center: Point::new(500.0, 400.0),
            default_floor_width: 1000.0,
            default_floor_height: 800.0,

            zone_coverage_threshold: 0.8,
            target_zone_coverage: 0.9,

            min_blind_spot_cells: 4,
            max_blind_spot_recommendations: 3,
            high_priority_blind_spot_sq_meters: 50.0,
            unit_conversion_factor: 1_000_000.0,
            report_blind_spots_without_cameras: false,

            candidate_offset: 100.0,
            proximity_score_cap: 200.0,
            camera_separation_cap: 100.0,

            redundancy_radius: 150.0,
            redundancy_margin: 50.0,

            fov_angle: 60.0,
            fov_radius: 10.0,
            fov_segments: 8,

            zone_camera_cost: 1500.0,
            blind_spot_camera_cost: 1200.0,
            redundancy_camera_cost: 1200.0,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(CoverageError::InvalidConfig(
                "grid_size must be at least 1".into(),
            ));
        }

        for (name, value) in [
            ("unit_conversion_factor", self.unit_conversion_factor),
            ("zone_camera_cost", self.zone_camera_cost),
            ("blind_spot_camera_cost", self.blind_spot_camera_cost),
            ("redundancy_camera_cost", self.redundancy_camera_cost),
            ("default_floor_width", self.default_floor_width),
            ("default_floor_height", self.default_floor_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoverageError::InvalidConfig(format!(
                    "{} ({}) must be positive and finite",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("default_view_angle", self.default_view_angle),
            ("default_view_distance", self.default_view_distance),
            ("high_priority_blind_spot_sq_meters", self.high_priority_blind_spot_sq_meters),
            ("candidate_offset", self.candidate_offset),
            ("proximity_score_cap", self.proximity_score_cap),
            ("camera_separation_cap", self.camera_separation_cap),
            ("redundancy_radius", self.redundancy_radius),
            ("redundancy_margin", self.redundancy_margin),
            ("fov_angle", self.fov_angle),
            ("fov_radius", self.fov_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CoverageError::InvalidConfig(format!(
                    "{} ({}) must be non-negative and finite",
                    name, value
                )));
            }
        }

        if !self.default_rotation.is_finite() || !self.fallback_center.is_finite() {
            return Err(CoverageError::InvalidConfig(
                "default_rotation and fallback_center must be finite".into(),
            ));
        }

        for (name, value) in [
            ("zone_coverage_threshold", self.zone_coverage_threshold),
            ("target_zone_coverage", self.target_zone_coverage),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CoverageError::InvalidConfig(format!(
                    "{} ({}) must be within [0, 1]",
                    name, value
                )));
            }
        }

        if self.fov_segments == 0 {
            return Err(CoverageError::InvalidConfig(
                "fov_segments must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
