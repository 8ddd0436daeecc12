//! Integration tests for the input boundary
//!
//! Covers reading layouts and engine configuration from disk and from
//! strings, and the errors surfaced when either is unusable.

use std::path::Path;

use camera_coverage::core::config::EngineConfig;
use camera_coverage::core::error::CoverageError;
use camera_coverage::core::types::Point;
use camera_coverage::recommendation::RecommendationEngine;
use camera_coverage::venue::{FloorPlan, LayoutIssue, LayoutValidator, VenueLayout, ZoneType};

fn demos() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/demos"))
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_demo_config_matches_defaults() {
    let config = EngineConfig::load(&demos().join("engine.toml")).unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let err = EngineConfig::load(&demos().join("no-such-config.toml")).unwrap_err();
    assert!(matches!(err, CoverageError::Io(_)));
}

#[test]
fn test_invalid_config_values_rejected() {
    let err = EngineConfig::from_toml_str("unit_conversion_factor = -1.0").unwrap_err();
    assert!(matches!(err, CoverageError::InvalidConfig(_)));
    assert!(err.to_string().contains("unit_conversion_factor"));

    let err = EngineConfig::from_toml_str("fov_segments = 0").unwrap_err();
    assert!(matches!(err, CoverageError::InvalidConfig(_)));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let config = EngineConfig {
        redundancy_camera_cost: 0.0,
        ..EngineConfig::default()
    };
    assert!(RecommendationEngine::new(config).is_err());
}

// ============================================================================
// Layouts
// ============================================================================

#[test]
fn test_demo_layout_loads() {
    let layout = VenueLayout::load(&demos().join("family-center.json")).unwrap();
    assert_eq!(layout.zones.len(), 4);
    assert_eq!(layout.cameras.len(), 3);

    let venue = layout.normalize(&EngineConfig::default());
    assert_eq!(venue.floor, FloorPlan::new(1000.0, 800.0));
    assert_eq!(venue.zones[1].zone_type, ZoneType::EmergencyExit);
    assert_eq!(venue.zones[0].center(Point::default()), Point::new(100.0, 100.0));
    assert!(LayoutValidator::validate(&venue.floor, &venue.zones, &venue.cameras).is_empty());
}

#[test]
fn test_malformed_layout_is_json_error() {
    let err = VenueLayout::from_json_str(r#"{ "zones": [ { "id": 1 } "#).unwrap_err();
    assert!(matches!(err, CoverageError::Json(_)));
}

#[test]
fn test_missing_layout_file_is_io_error() {
    let err = VenueLayout::load(&demos().join("missing.json")).unwrap_err();
    assert!(matches!(err, CoverageError::Io(_)));
}

/// Degenerate polygons are reported but never stop a run
#[test]
fn test_degenerate_zones_still_analyzed() {
    let layout = VenueLayout::from_json_str(
        r#"{
            "floorPlan": { "width": 1000, "height": 800 },
            "zones": [
                { "id": "a", "name": "Loading Door", "type": "EXIT", "coordinates": [{ "x": 10, "y": 10 }] },
                { "id": "b", "name": "Side Door", "type": "ENTRANCE", "coordinates": null }
            ]
        }"#,
    )
    .unwrap();

    let engine = RecommendationEngine::default();
    let venue = layout.normalize(engine.config());
    let issues = LayoutValidator::validate(&venue.floor, &venue.zones, &venue.cameras);
    assert!(issues
        .iter()
        .any(|i| matches!(i, LayoutIssue::InsufficientVertices { .. })));

    // Both zones are under-covered; the empty polygon falls back to the default centroid
    let recs = engine.generate_for(&venue);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1].suggested_position, Point::new(400.0, 300.0));
}
