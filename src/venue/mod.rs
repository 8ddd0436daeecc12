//! Venue input: floor plan, zones, cameras

pub mod layout;
pub mod model;
pub mod validation;

pub use layout::{CameraRecord, FloorPlanRecord, Venue, VenueLayout, ZoneRecord};
pub use model::{Camera, FloorPlan, Zone, ZoneType};
pub use validation::{LayoutIssue, LayoutValidator};
