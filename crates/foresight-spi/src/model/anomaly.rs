//! Anomaly record types.

use serde::{Deserialize, Serialize};

/// Anomaly severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    Warning,
    Critical,
}

/// Direction of an anomalous deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Spike,
    Drop,
}

/// A statistically anomalous observation in a historical series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Offset of the observation in the source series
    pub index: usize,
    /// The original observation
    pub value: f64,
    /// Standard deviations from the series mean
    pub z_score: f64,
    pub severity: AnomalySeverity,
    pub kind: AnomalyKind,
}
