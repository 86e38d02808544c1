//! Foresight Core
//!
//! Numerical engine behind the usage dashboard: fits daily historical
//! counts to one of five forecasting models, projects them forward,
//! flags statistical outliers, bounds forecasts with confidence
//! intervals, and synthesizes rule-based insights.
//!
//! ## Example
//!
//! ```rust
//! use foresight_core::{forecast, ModelKind};
//!
//! let history = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let predictions = forecast(&history, ModelKind::LinearRegression, 2);
//! assert_eq!(predictions, vec![7.0, 8.0]);
//! ```

pub mod anomaly;
pub mod catalog;
pub mod confidence;
pub mod forecaster;
pub mod insights;
pub mod models;

// Re-export SPI contracts and models for implementations
pub use foresight_spi::{
    Anomaly, AnomalyKind, AnomalyScorer, AnomalySeverity, ConfidenceBand, EngineError,
    ForecastModel, Insight, InsightKind, MetricDescriptor, ModelDescriptor, PolyFit, Result,
    TrendLine,
};

// Re-export main entry points
pub use anomaly::{detect_anomalies, ZScoreDetector};
pub use catalog::{find_metric, find_model, metric_catalog, model_catalog};
pub use confidence::confidence_interval;
pub use forecaster::{forecast, forecast_with_confidence, ForecastWithConfidence, ModelKind};
pub use insights::generate_insights;
