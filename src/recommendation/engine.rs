//! Camera recommendation engine
//!
//! A single stateless pass per venue:
//!
//! 1. Critical zones (entrances, exits, emergency exits, high traffic) whose
//!    proximity coverage is below threshold get a new camera at the best
//!    placement candidate.
//! 2. The coverage grid is built once and its largest blind spots get a
//!    camera at their centroid.
//! 3. Entrances and exits watched by exactly one camera get a backup
//!    mirrored across the zone centroid.
//!
//! The engine never mutates its inputs and keeps no state between runs, so
//! identical inputs give identical output and venues can be processed in
//! parallel.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use super::types::{MetadataValue, Priority, Recommendation, RecommendationStatus, RecommendationType};
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::core::types::Point;
use crate::coverage::blind_spot::BlindSpotDetector;
use crate::coverage::grid::CoverageGrid;
use crate::coverage::report::CoverageReport;
use crate::coverage::zone::{cameras_near, is_under_covered, zone_coverage};
use crate::placement::optimizer::PlacementOptimizer;
use crate::placement::redundancy::mirrored_position;
use crate::spatial::geometry::fov_polygon;
use crate::venue::layout::{Venue, VenueLayout};
use crate::venue::model::{Camera, FloorPlan, Zone};
use crate::venue::validation::LayoutValidator;

/// Result of analyzing one venue layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueAnalysis {
    pub venue: Option<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<CoverageReport>,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend new cameras for a floor plan
    ///
    /// Recommendations are returned in generation order: zone coverage,
    /// then blind spots, then redundancy. Use
    /// [`rank_by_priority`](super::types::rank_by_priority) to order by urgency.
    pub fn generate(&self, floor: &FloorPlan, zones: &[Zone], cameras: &[Camera]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        recommendations.extend(self.zone_recommendations(floor, zones, cameras));
        recommendations.extend(self.blind_spot_recommendations(floor, cameras));
        recommendations.extend(self.redundancy_recommendations(floor, zones, cameras));

        tracing::info!(
            "Generated {} recommendations for {} zones and {} cameras",
            recommendations.len(),
            zones.len(),
            cameras.len()
        );
        recommendations
    }

    /// Recommend new cameras for a normalized venue
    pub fn generate_for(&self, venue: &Venue) -> Vec<Recommendation> {
        for issue in LayoutValidator::validate(&venue.floor, &venue.zones, &venue.cameras) {
            tracing::warn!("Layout issue: {}", issue);
        }
        self.generate(&venue.floor, &venue.zones, &venue.cameras)
    }

    /// Normalize a layout and recommend new cameras for it
    pub fn generate_for_layout(&self, layout: &VenueLayout) -> Vec<Recommendation> {
        self.generate_for(&layout.normalize(&self.config))
    }

    /// Process independent layouts in parallel, preserving input order
    pub fn generate_batch(&self, layouts: &[VenueLayout]) -> Vec<Vec<Recommendation>> {
        layouts
            .par_iter()
            .map(|layout| self.generate_for_layout(layout))
            .collect()
    }

    /// Recommendations plus, optionally, a coverage summary
    pub fn analyze(&self, layout: &VenueLayout, with_report: bool) -> VenueAnalysis {
        let venue = layout.normalize(&self.config);
        let recommendations = self.generate_for(&venue);
        let report = with_report.then(|| CoverageReport::build(venue.floor, &venue.cameras, &self.config));

        VenueAnalysis {
            venue: venue.name,
            recommendations,
            report,
        }
    }

    /// [`analyze`](Self::analyze) over many layouts in parallel
    pub fn analyze_batch(&self, layouts: &[VenueLayout], with_report: bool) -> Vec<VenueAnalysis> {
        layouts
            .par_iter()
            .map(|layout| self.analyze(layout, with_report))
            .collect()
    }

    // ── Stage 1: critical zone coverage ────────────────────────────────────

    fn zone_recommendations(&self, floor: &FloorPlan, zones: &[Zone], cameras: &[Camera]) -> Vec<Recommendation> {
        let optimizer = PlacementOptimizer::from_config(&self.config);
        let mut recommendations = Vec::new();

        for zone in zones.iter().filter(|z| z.zone_type.is_critical()) {
            let center = zone.center(self.config.fallback_center);
            let coverage = zone_coverage(center, cameras);

            if !is_under_covered(coverage, self.config.zone_coverage_threshold) {
                tracing::debug!(
                    "Zone {} ({}) sufficiently covered at {:.0}%",
                    zone.name,
                    zone.zone_type,
                    coverage * 100.0
                );
                continue;
            }

            tracing::debug!(
                "Zone {} ({}) under-covered at {:.0}%",
                zone.name,
                zone.zone_type,
                coverage * 100.0
            );

            let position = floor.clamp(optimizer.best_position(center, cameras, floor));
            let (recommendation_type, priority) = if zone.zone_type.is_entrance_or_exit() {
                (RecommendationType::EntranceExit, Priority::High)
            } else if zone.zone_type.is_emergency() {
                (RecommendationType::HighTraffic, Priority::Critical)
            } else {
                (RecommendationType::HighTraffic, Priority::High)
            };

            let mut metadata = BTreeMap::new();
            metadata.insert("targetZone".to_string(), MetadataValue::from(zone.id.as_str()));
            metadata.insert("currentCoverage".to_string(), coverage.into());
            metadata.insert(
                "expectedImprovement".to_string(),
                (self.config.target_zone_coverage - coverage).max(0.0).into(),
            );

            recommendations.push(Recommendation {
                recommendation_type,
                suggested_position: position,
                reasoning: format!(
                    "{} area has insufficient camera coverage ({}%)",
                    zone.name,
                    (coverage * 100.0).round() as i64
                ),
                priority,
                coverage_area: self.coverage_area(position, floor),
                estimated_cost: self.config.zone_camera_cost,
                status: RecommendationStatus::Pending,
                metadata,
            });
        }

        recommendations
    }

    // ── Stage 2: blind spots ───────────────────────────────────────────────

    fn blind_spot_recommendations(&self, floor: &FloorPlan, cameras: &[Camera]) -> Vec<Recommendation> {
        if !cameras.iter().any(Camera::has_field_of_view) && !self.config.report_blind_spots_without_cameras {
            tracing::debug!("No camera has a field of view; skipping blind-spot detection");
            return Vec::new();
        }

        let grid = CoverageGrid::build(cameras, *floor, self.config.grid_size);
        let spots = BlindSpotDetector::from_config(&self.config).detect(&grid, cameras);
        tracing::debug!(
            "Coverage grid {}/{} cells covered, {} blind spots",
            grid.covered_cells(),
            grid.total_cells(),
            spots.len()
        );

        spots
            .into_iter()
            .take(self.config.max_blind_spot_recommendations)
            .map(|spot| {
                let priority = if spot.size_sq_meters > self.config.high_priority_blind_spot_sq_meters {
                    Priority::High
                } else {
                    Priority::Medium
                };

                let mut metadata = BTreeMap::new();
                metadata.insert("blindSpotSize".to_string(), spot.size_sq_meters.into());
                metadata.insert(
                    "adjacentCameras".to_string(),
                    MetadataValue::from(spot.nearby_camera_id.clone()),
                );

                Recommendation {
                    recommendation_type: RecommendationType::BlindSpot,
                    suggested_position: spot.position,
                    reasoning: format!(
                        "Blind spot detected in coverage area ({:.2}m²)",
                        spot.size_sq_meters
                    ),
                    priority,
                    coverage_area: self.coverage_area(spot.position, floor),
                    estimated_cost: self.config.blind_spot_camera_cost,
                    status: RecommendationStatus::Pending,
                    metadata,
                }
            })
            .collect()
    }

    // ── Stage 3: redundancy for entrances and exits ────────────────────────

    fn redundancy_recommendations(&self, floor: &FloorPlan, zones: &[Zone], cameras: &[Camera]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for zone in zones.iter().filter(|z| z.zone_type.is_entrance_or_exit()) {
            let center = zone.center(self.config.fallback_center);
            let covering = cameras_near(center, cameras, self.config.redundancy_radius);

            let [primary] = covering.as_slice() else {
                continue;
            };

            tracing::debug!("Zone {} depends on camera {} alone", zone.name, primary.id);
            let position = mirrored_position(center, primary.position, floor, self.config.redundancy_margin);

            let mut metadata = BTreeMap::new();
            metadata.insert("targetZone".to_string(), MetadataValue::from(zone.id.as_str()));
            metadata.insert("primaryCamera".to_string(), MetadataValue::from(primary.id.as_str()));
            metadata.insert("redundancyType".to_string(), MetadataValue::from("backup_coverage"));

            recommendations.push(Recommendation {
                recommendation_type: RecommendationType::Redundancy,
                suggested_position: position,
                reasoning: format!(
                    "Single point of failure: {} covered by only one camera",
                    zone.name
                ),
                priority: Priority::Medium,
                coverage_area: self.coverage_area(position, floor),
                estimated_cost: self.config.redundancy_camera_cost,
                status: RecommendationStatus::Pending,
                metadata,
            });
        }

        recommendations
    }

    /// Field-of-view polygon for a proposed camera, clamped onto the floor
    fn coverage_area(&self, position: Point, floor: &FloorPlan) -> Vec<Point> {
        fov_polygon(
            position,
            self.config.fov_angle,
            self.config.fov_radius,
            self.config.fov_segments,
            0.0,
        )
        .into_iter()
        .map(|p| floor.clamp(p))
        .collect()
    }
}
