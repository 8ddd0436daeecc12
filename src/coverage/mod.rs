//! Coverage analysis: grid coverage, zone coverage estimate, blind spots

pub mod blind_spot;
pub mod grid;
pub mod report;
pub mod zone;

pub use blind_spot::{BlindSpot, BlindSpotDetector};
pub use grid::CoverageGrid;
pub use report::{CameraCoverage, CoverageRating, CoverageReport};
pub use zone::{cameras_near, is_under_covered, zone_coverage};
