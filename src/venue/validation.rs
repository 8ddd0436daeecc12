//! Layout diagnostics: zone polygon validity, camera placement bounds
//!
//! Nothing here rejects a layout. The engine tolerates every issue reported
//! (degenerate zones fall back to a default centroid), so these are surfaced
//! as warnings for whoever maintains the floor plan.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, Line, LineString, Polygon};

use super::model::{Camera, FloorPlan, Zone};
use crate::core::types::Point;

/// Issue found in a layout record
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutIssue {
    InsufficientVertices { zone_id: String, count: usize, minimum: usize },
    NonFiniteVertex { zone_id: String, index: usize },
    ZeroArea { zone_id: String },
    SelfIntersecting { zone_id: String },
    ZoneOutOfBounds { zone_id: String, vertex: Point },
    CameraOutOfBounds { camera_id: String, position: Point },
}

impl std::fmt::Display for LayoutIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutIssue::InsufficientVertices { zone_id, count, minimum } => write!(
                f,
                "zone {} has {} vertices (need at least {})",
                zone_id, count, minimum
            ),
            LayoutIssue::NonFiniteVertex { zone_id, index } => {
                write!(f, "zone {} vertex #{} is missing or not finite", zone_id, index)
            }
            LayoutIssue::ZeroArea { zone_id } => write!(f, "zone {} encloses no area", zone_id),
            LayoutIssue::SelfIntersecting { zone_id } => {
                write!(f, "zone {} polygon edges cross each other", zone_id)
            }
            LayoutIssue::ZoneOutOfBounds { zone_id, vertex } => write!(
                f,
                "zone {} vertex ({:.1}, {:.1}) lies outside the floor plan",
                zone_id, vertex.x, vertex.y
            ),
            LayoutIssue::CameraOutOfBounds { camera_id, position } => write!(
                f,
                "camera {} at ({:.1}, {:.1}) lies outside the floor plan",
                camera_id, position.x, position.y
            ),
        }
    }
}

pub struct LayoutValidator;

impl LayoutValidator {
    /// Validate every zone and camera against the floor plan
    pub fn validate(floor: &FloorPlan, zones: &[Zone], cameras: &[Camera]) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();
        for zone in zones {
            issues.extend(Self::validate_zone(zone, floor));
        }
        for camera in cameras {
            if !floor.contains(camera.position) {
                issues.push(LayoutIssue::CameraOutOfBounds {
                    camera_id: camera.id.clone(),
                    position: camera.position,
                });
            }
        }
        issues
    }

    /// Validate a single zone polygon
    pub fn validate_zone(zone: &Zone, floor: &FloorPlan) -> Vec<LayoutIssue> {
        let mut issues = Vec::new();
        let vertices = &zone.coordinates;

        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            issues.push(LayoutIssue::NonFiniteVertex {
                zone_id: zone.id.clone(),
                index,
            });
            return issues; // Can't do further checks
        }

        if vertices.len() < 3 {
            issues.push(LayoutIssue::InsufficientVertices {
                zone_id: zone.id.clone(),
                count: vertices.len(),
                minimum: 3,
            });
            return issues;
        }

        // A symmetric bowtie has zero signed area, so crossing edges are checked first
        if Self::is_self_intersecting(vertices) {
            issues.push(LayoutIssue::SelfIntersecting {
                zone_id: zone.id.clone(),
            });
        } else if Self::to_geo_polygon(vertices).unsigned_area() <= f64::EPSILON {
            issues.push(LayoutIssue::ZeroArea {
                zone_id: zone.id.clone(),
            });
        }

        if let Some(vertex) = vertices.iter().find(|v| !floor.contains(**v)) {
            issues.push(LayoutIssue::ZoneOutOfBounds {
                zone_id: zone.id.clone(),
                vertex: *vertex,
            });
        }

        issues
    }

    fn to_geo_polygon(vertices: &[Point]) -> Polygon<f64> {
        let coords: Vec<(f64, f64)> = vertices.iter().map(|p| (p.x, p.y)).collect();
        Polygon::new(LineString::from(coords), vec![])
    }

    /// Do any two zone edges cross each other away from their endpoints?
    fn is_self_intersecting(vertices: &[Point]) -> bool {
        if vertices.len() < 4 {
            return false;
        }

        let ring: Vec<Point> = vertices.iter().chain(vertices.first()).copied().collect();
        let edges: Vec<Line<f64>> = ring
            .windows(2)
            .map(|pair| Line::new((pair[0].x, pair[0].y), (pair[1].x, pair[1].y)))
            .collect();

        // Neighbouring edges only ever meet at a shared vertex, which is not a proper crossing
        edges.iter().enumerate().any(|(i, edge)| {
            edges.iter().skip(i + 2).any(|other| {
                matches!(
                    line_intersection(*edge, *other),
                    Some(LineIntersection::SinglePoint { is_proper: true, .. })
                )
            })
        })
    }
}
