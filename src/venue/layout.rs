//! JSON input records for a venue layout
//!
//! A layout file describes one floor plan together with its zones and the
//! cameras already installed on it. Field names follow the camelCase of the
//! records the venue platform stores. Every numeric field a camera may omit
//! is optional here; [`VenueLayout::normalize`] applies the configured
//! defaults and produces the strict [`Venue`] the engine works on.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::model::{Camera, FloorPlan, Zone, ZoneType};
use crate::core::config::EngineConfig;
use crate::core::error::{CoverageError, Result};
use crate::core::types::Point;

/// Root structure of a layout file
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueLayout {
    /// Human-readable venue or floor name (used in CLI output only)
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub floor_plan: FloorPlanRecord,
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
    #[serde(default)]
    pub cameras: Vec<CameraRecord>,
}

/// Floor plan dimensions, either flat or nested under `dimensions`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FloorPlanRecord {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Dimensions {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

/// A zone as stored by the caller
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Polygon vertices; anything that is not a list of `{x, y}` objects
    /// becomes an empty or partially non-finite polygon
    #[serde(default, deserialize_with = "lenient_points")]
    pub coordinates: Vec<Point>,
}

/// A camera as stored by the caller
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<Point>,
    #[serde(default)]
    pub view_angle: Option<f64>,
    #[serde(default)]
    pub view_distance: Option<f64>,
    #[serde(default)]
    pub rotation: Option<f64>,
}

/// Normalized venue: the engine's input
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub name: Option<String>,
    pub floor: FloorPlan,
    pub zones: Vec<Zone>,
    pub cameras: Vec<Camera>,
}

impl VenueLayout {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a layout from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Apply defaults and drop records the engine cannot use
    ///
    /// Cameras without a position are dropped. Missing or non-finite
    /// camera angles, ranges and rotations take the configured defaults.
    /// Floor dimensions that are missing or not positive take the
    /// configured default floor size.
    pub fn normalize(&self, config: &EngineConfig) -> Venue {
        let floor = self.floor_plan.resolve(config);

        let zones = self
            .zones
            .iter()
            .map(|z| Zone::new(z.id.clone(), z.name.clone(), z.zone_type, z.coordinates.clone()))
            .collect();

        let cameras = self
            .cameras
            .iter()
            .filter_map(|c| {
                let camera = c.resolve(config);
                if camera.is_none() {
                    tracing::warn!("Camera {} has no usable position; ignoring it", c.id);
                }
                camera
            })
            .collect();

        Venue {
            name: self.venue.clone(),
            floor,
            zones,
            cameras,
        }
    }

    /// Like [`normalize`](Self::normalize), but a floor plan without usable
    /// dimensions is an error instead of taking the default size
    pub fn normalize_strict(&self, config: &EngineConfig) -> Result<Venue> {
        match self.floor_plan.dimensions() {
            (Some(_), Some(_)) => Ok(self.normalize(config)),
            _ => Err(CoverageError::InvalidLayout(format!(
                "{} has no usable floor plan width and height",
                self.venue.as_deref().unwrap_or("layout")
            ))),
        }
    }
}

impl FloorPlanRecord {
    /// Positive, finite width and height; nested `dimensions` win
    fn dimensions(&self) -> (Option<f64>, Option<f64>) {
        let nested = self.dimensions.as_ref();
        let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        (
            usable(nested.and_then(|d| d.width).or(self.width)),
            usable(nested.and_then(|d| d.height).or(self.height)),
        )
    }

    fn resolve(&self, config: &EngineConfig) -> FloorPlan {
        let (width, height) = self.dimensions();
        let width = width.unwrap_or_else(|| {
            tracing::debug!("Floor width missing; using {}", config.default_floor_width);
            config.default_floor_width
        });
        let height = height.unwrap_or_else(|| {
            tracing::debug!("Floor height missing; using {}", config.default_floor_height);
            config.default_floor_height
        });

        FloorPlan::new(width, height)
    }
}

impl CameraRecord {
    fn resolve(&self, config: &EngineConfig) -> Option<Camera> {
        let position = self.position.filter(|p| p.is_finite())?;
        let or_default = |v: Option<f64>, default: f64| v.filter(|v| v.is_finite()).unwrap_or(default);

        Some(Camera::new(
            self.id.clone(),
            position,
            or_default(self.view_angle, config.default_view_angle),
            or_default(self.view_distance, config.default_view_distance),
            or_default(self.rotation, config.default_rotation),
        ))
    }
}

/// Accept any JSON for a polygon; keep what looks like points
///
/// Non-array values give an empty polygon. Array entries that are not
/// objects with numeric `x` and `y` become non-finite points so the zone
/// falls back to the default centroid instead of a skewed one.
fn lenient_points<'de, D>(deserializer: D) -> std::result::Result<Vec<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .map(|item| {
            let x = item.get("x").and_then(Value::as_f64);
            let y = item.get("y").and_then(Value::as_f64);
            match (x, y) {
                (Some(x), Some(y)) => Point::new(x, y),
                _ => Point::new(f64::NAN, f64::NAN),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults_applied() {
        let layout = VenueLayout::from_json_str(
            r#"{
                "floorPlan": { "width": 1000, "height": 800 },
                "cameras": [
                    { "id": "c1", "position": { "x": 10, "y": 20 } },
                    { "id": "c2", "position": { "x": 1, "y": 2 }, "viewAngle": 90, "viewDistance": 300, "rotation": 45 },
                    { "id": "c3" }
                ]
            }"#,
        )
        .unwrap();

        let venue = layout.normalize(&EngineConfig::default());
        assert_eq!(venue.cameras.len(), 2);
        assert_eq!(venue.cameras[0], Camera::new("c1", Point::new(10.0, 20.0), 60.0, 10.0, 0.0));
        assert_eq!(venue.cameras[1].view_angle, 90.0);
        assert_eq!(venue.cameras[1].view_distance, 300.0);
        assert_eq!(venue.cameras[1].rotation, 45.0);
    }

    #[test]
    fn test_nested_dimensions_and_defaults() {
        let layout = VenueLayout::from_json_str(
            r#"{ "floorPlan": { "dimensions": { "width": 1200, "height": 0 } } }"#,
        )
        .unwrap();
        let venue = layout.normalize(&EngineConfig::default());
        assert_eq!(venue.floor, FloorPlan::new(1200.0, 800.0));

        let empty = VenueLayout::from_json_str("{}").unwrap();
        assert_eq!(empty.normalize(&EngineConfig::default()).floor, FloorPlan::new(1000.0, 800.0));
    }

    #[test]
    fn test_strict_requires_floor_dimensions() {
        let config = EngineConfig::default();
        let missing = VenueLayout::from_json_str(r#"{ "venue": "Annex", "floorPlan": { "width": 500 } }"#).unwrap();
        let err = missing.normalize_strict(&config).unwrap_err();
        assert!(matches!(err, CoverageError::InvalidLayout(_)));
        assert!(err.to_string().contains("Annex"));

        let ok = VenueLayout::from_json_str(r#"{ "floorPlan": { "width": 500, "height": 300 } }"#).unwrap();
        assert_eq!(ok.normalize_strict(&config).unwrap().floor, FloorPlan::new(500.0, 300.0));
    }

    #[test]
    fn test_malformed_coordinates_are_tolerated() {
        let layout = VenueLayout::from_json_str(
            r#"{
                "zones": [
                    { "id": "a", "name": "A", "type": "ENTRANCE", "coordinates": "not a polygon" },
                    { "id": "b", "name": "B", "type": "EXIT", "coordinates": [{ "x": 1 }, { "x": 2, "y": 3 }] },
                    { "id": "c", "name": "C", "type": "ARCADE" }
                ]
            }"#,
        )
        .unwrap();

        let venue = layout.normalize(&EngineConfig::default());
        assert!(venue.zones[0].coordinates.is_empty());
        assert_eq!(venue.zones[1].coordinates.len(), 2);
        assert_eq!(venue.zones[1].center(Point::new(7.0, 7.0)), Point::new(7.0, 7.0));
        assert_eq!(venue.zones[2].zone_type, ZoneType::Other);
    }
}
