//! Camera coverage analysis and placement recommendations
//!
//! Given a venue floor plan, its zones and the cameras already installed,
//! the engine reports where new cameras should go: under-covered critical
//! zones, uncovered regions of the floor, and entrances that depend on a
//! single camera.
//!
//! ```no_run
//! use camera_coverage::recommendation::{rank_by_priority, RecommendationEngine};
//! use camera_coverage::venue::VenueLayout;
//!
//! # fn main() -> camera_coverage::core::Result<()> {
//! let layout = VenueLayout::load("venue.json".as_ref())?;
//! let mut recommendations = RecommendationEngine::default().generate_for_layout(&layout);
//! rank_by_priority(&mut recommendations);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod coverage;
pub mod placement;
pub mod recommendation;
pub mod spatial;
pub mod venue;
