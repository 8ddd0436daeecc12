//! Recommendation records handed back to the caller
//!
//! Records carry no storage identifiers or timestamps; the caller assigns
//! those when it persists them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Why a camera is being recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    /// Under-covered entrance or exit
    EntranceExit,
    /// Under-covered emergency exit or high-traffic zone
    HighTraffic,
    /// Contiguous uncovered region of the floor
    BlindSpot,
    /// Backup for a zone watched by a single camera
    Redundancy,
}

/// Urgency, ordered `Low < Medium < High < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Review state; the engine only ever produces `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Implemented,
}

/// Auxiliary value in recommendation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
    Null,
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Number(v)
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::Text(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl<T: Into<MetadataValue>> From<Option<T>> for MetadataValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(MetadataValue::Null, Into::into)
    }
}

/// Proposed camera placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub suggested_position: Point,
    pub reasoning: String,
    pub priority: Priority,
    /// Polygon approximating the proposed camera's field of view
    pub coverage_area: Vec<Point>,
    pub estimated_cost: f64,
    #[serde(default)]
    pub status: RecommendationStatus,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Recommendation {
    pub fn metadata_number(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key) {
            Some(MetadataValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn metadata_text(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(MetadataValue::Text(v)) => Some(v),
            _ => None,
        }
    }
}

/// Stable sort, most urgent first; generation order is kept within a priority
pub fn rank_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.priority.cmp(&a.priority));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(kind: RecommendationType, priority: Priority, reasoning: &str) -> Recommendation {
        Recommendation {
            recommendation_type: kind,
            suggested_position: Point::default(),
            reasoning: reasoning.into(),
            priority,
            coverage_area: vec![],
            estimated_cost: 1.0,
            status: RecommendationStatus::Pending,
            metadata: BTreeMap::new(),
        }
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_rank_is_stable() {
        let mut recs = vec![
            rec(RecommendationType::BlindSpot, Priority::Medium, "a"),
            rec(RecommendationType::EntranceExit, Priority::High, "b"),
            rec(RecommendationType::Redundancy, Priority::Medium, "c"),
            rec(RecommendationType::HighTraffic, Priority::Critical, "d"),
        ];
        rank_by_priority(&mut recs);
        let order: Vec<_> = recs.iter().map(|r| r.reasoning.as_str()).collect();
        assert_eq!(order, vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_json_shape() {
        let mut r = rec(RecommendationType::EntranceExit, Priority::High, "x");
        r.metadata.insert("targetZone".into(), "z1".into());
        r.metadata.insert("adjacentCameras".into(), MetadataValue::from(None::<String>));
        let json = serde_json::to_value(&r).unwrap();

        assert_eq!(json["recommendationType"], "ENTRANCE_EXIT");
        assert_eq!(json["priority"], "HIGH");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["metadata"]["targetZone"], "z1");
        assert!(json["metadata"]["adjacentCameras"].is_null());
        assert_eq!(json["suggestedPosition"]["x"], 0.0);
    }
}
