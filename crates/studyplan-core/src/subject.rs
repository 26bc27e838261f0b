//! Subject model and priority weighting.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest priority tier.
pub const PRIORITY_HIGH: u8 = 1;
/// Middle priority tier (default for new subjects).
pub const PRIORITY_MEDIUM: u8 = 2;
/// Lowest priority tier.
pub const PRIORITY_LOW: u8 = 3;

/// Default display color for new subjects.
pub const DEFAULT_COLOR: &str = "#6366f1";

/// A subject of study owned by a user.
///
/// Subjects are created and edited by the surrounding application layer;
/// the allocator treats them as immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Priority tier: 1 = high, 2 = medium, 3 = low.
    pub priority: u8,
    /// Display color (hex).
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Subject {
    /// Create a subject with a fresh id and the default display color.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            priority,
            color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Scheduling weight derived from the priority tier: high carries 3x
    /// the base share, medium 2x, low 1x.
    ///
    /// Priorities outside the documented tiers carry no weight, which
    /// excludes the subject from allocation entirely.
    pub fn weight(&self) -> Option<u32> {
        if (PRIORITY_HIGH..=PRIORITY_LOW).contains(&self.priority) {
            Some(u32::from(4 - self.priority))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_maps_priority_tiers() {
        assert_eq!(Subject::new("Math", PRIORITY_HIGH).weight(), Some(3));
        assert_eq!(Subject::new("History", PRIORITY_MEDIUM).weight(), Some(2));
        assert_eq!(Subject::new("Art", PRIORITY_LOW).weight(), Some(1));
    }

    #[test]
    fn out_of_range_priority_has_no_weight() {
        assert_eq!(Subject::new("Zero", 0).weight(), None);
        assert_eq!(Subject::new("Four", 4).weight(), None);
        assert_eq!(Subject::new("Max", u8::MAX).weight(), None);
    }

    #[test]
    fn subject_serialization() {
        let subject = Subject {
            id: "subject-1".to_string(),
            name: "Physics".to_string(),
            description: Some("Mechanics and waves".to_string()),
            priority: PRIORITY_HIGH,
            color: "#3b82f6".to_string(),
        };

        let json = serde_json::to_string(&subject).unwrap();
        let decoded: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, subject);
    }

    #[test]
    fn color_defaults_when_absent() {
        let subject: Subject =
            serde_json::from_str(r#"{"id":"s1","name":"Math","priority":1}"#).unwrap();
        assert_eq!(subject.color, DEFAULT_COLOR);
    }
}
