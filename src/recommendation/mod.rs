//! Camera recommendations: record types and the engine that produces them

pub mod engine;
pub mod types;

pub use engine::{RecommendationEngine, VenueAnalysis};
pub use types::{
    rank_by_priority, MetadataValue, Priority, Recommendation, RecommendationStatus,
    RecommendationType,
};
