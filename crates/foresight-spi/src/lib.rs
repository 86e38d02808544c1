//! Foresight Service Provider Interface
//!
//! Defines the contracts, domain models, and error types shared by the
//! forecasting, anomaly detection, and insight generation components.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyScorer, ForecastModel};
pub use error::{EngineError, Result};
pub use model::{
    Anomaly, AnomalyKind, AnomalySeverity, ConfidenceBand, Insight, InsightKind,
    MetricDescriptor, ModelDescriptor, PolyFit, TrendLine,
};
