//! Floor plan, zone and camera records consumed by the engine
//!
//! These are the normalized forms: optional fields have already been
//! replaced by their defaults at the layout boundary.

use serde::{Deserialize, Serialize};

use crate::core::types::{CameraId, Point, ZoneId};
use crate::spatial::geometry::{centroid_or, clamp_to_bounds, within_bounds};

/// Rectangular floor area in plan units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub width: f64,
    pub height: f64,
}

impl FloorPlan {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in plan-unit²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        within_bounds(point, self.width, self.height)
    }

    pub fn clamp(&self, point: Point) -> Point {
        clamp_to_bounds(point, self.width, self.height)
    }
}

/// Safety-relevant zone category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneType {
    Entrance,
    Exit,
    EmergencyExit,
    HighTraffic,
    PlayArea,
    Restroom,
    FoodCourt,
    Office,
    Storage,
    Restricted,
    #[serde(other)]
    Other,
}

impl ZoneType {
    /// Zones that must have camera coverage: entrances, exits, emergency exits, high traffic
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            ZoneType::Entrance | ZoneType::Exit | ZoneType::EmergencyExit | ZoneType::HighTraffic
        )
    }

    /// Plain entrances and exits (not emergency exits)
    pub fn is_entrance_or_exit(&self) -> bool {
        matches!(self, ZoneType::Entrance | ZoneType::Exit)
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, ZoneType::EmergencyExit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneType::Entrance => "ENTRANCE",
            ZoneType::Exit => "EXIT",
            ZoneType::EmergencyExit => "EMERGENCY_EXIT",
            ZoneType::HighTraffic => "HIGH_TRAFFIC",
            ZoneType::PlayArea => "PLAY_AREA",
            ZoneType::Restroom => "RESTROOM",
            ZoneType::FoodCourt => "FOOD_COURT",
            ZoneType::Office => "OFFICE",
            ZoneType::Storage => "STORAGE",
            ZoneType::Restricted => "RESTRICTED",
            ZoneType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named polygonal region of the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Polygon vertices in order; may be empty or contain non-finite points
    pub coordinates: Vec<Point>,
}

impl Zone {
    pub fn new(id: impl Into<ZoneId>, name: impl Into<String>, zone_type: ZoneType, coordinates: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            zone_type,
            coordinates,
        }
    }

    /// Vertex mean, or `fallback` when the polygon is empty or malformed
    pub fn center(&self, fallback: Point) -> Point {
        centroid_or(&self.coordinates, fallback)
    }
}

/// Installed camera with all optional fields resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: CameraId,
    pub position: Point,
    /// Field-of-view width in degrees
    pub view_angle: f64,
    /// Maximum sensing range in plan units
    pub view_distance: f64,
    /// Facing direction in degrees
    pub rotation: f64,
}

impl Camera {
    pub fn new(id: impl Into<CameraId>, position: Point, view_angle: f64, view_distance: f64, rotation: f64) -> Self {
        Self {
            id: id.into(),
            position,
            view_angle,
            view_distance,
            rotation,
        }
    }

    pub fn half_angle(&self) -> f64 {
        self.view_angle / 2.0
    }

    /// A cone with zero width or range sees nothing
    pub fn has_field_of_view(&self) -> bool {
        self.view_angle > 0.0 && self.view_distance > 0.0
    }
}
