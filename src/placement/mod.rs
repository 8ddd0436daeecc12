//! Where to put new cameras

pub mod optimizer;
pub mod redundancy;

pub use optimizer::PlacementOptimizer;
pub use redundancy::mirrored_position;
