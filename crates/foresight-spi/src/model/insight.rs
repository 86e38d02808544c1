//! Insight record types.

use serde::{Deserialize, Serialize};

/// Category of a generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Growth,
    Decline,
    Anomaly,
    Pattern,
    Forecast,
    Optimization,
}

/// A short human-readable observation synthesized from history,
/// forecast, and anomalies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
    /// Fixed per-rule confidence in [0, 1]; not computed from data quality
    pub confidence: f64,
    /// Suggested follow-up, when the rule has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Insight {
    /// Create an insight without an action.
    pub fn new(kind: InsightKind, message: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind,
            message: message.into(),
            confidence,
            action: None,
        }
    }

    /// Attach a suggested action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_builder() {
        let insight = Insight::new(InsightKind::Growth, "up 12%", 0.85)
            .with_action("keep an eye on capacity");
        assert_eq!(insight.kind, InsightKind::Growth);
        assert_eq!(insight.confidence, 0.85);
        assert_eq!(insight.action.as_deref(), Some("keep an eye on capacity"));
    }

    #[test]
    fn test_action_omitted_from_json() {
        let insight = Insight::new(InsightKind::Forecast, "steady", 0.75);
        let json = serde_json::to_string(&insight).unwrap();
        assert!(!json.contains("action"));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&InsightKind::Optimization).unwrap();
        assert_eq!(json, "\"optimization\"");
    }
}
