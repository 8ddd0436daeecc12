//! Spatial primitives shared by the coverage and placement layers

pub mod geometry;
pub mod grid;

pub use geometry::{centroid, centroid_or, clamp_to_bounds, distance, fov_polygon, in_cone};
pub use grid::Grid;
