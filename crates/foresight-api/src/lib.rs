//! Foresight Consumer API
//!
//! Consumer configurations for the forecasting engine.
//!
//! This crate provides:
//! - Configuration types with the engine's default tuning
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use foresight_core::{
    anomaly, catalog, confidence, detect_anomalies, confidence_interval, find_metric,
    find_model, forecast, forecast_with_confidence, forecaster, generate_insights, insights,
    metric_catalog, model_catalog, models, ForecastWithConfidence, ModelKind, ZScoreDetector,
};

// Re-export contracts and models from SPI
pub use foresight_spi::{
    Anomaly, AnomalyKind, AnomalyScorer, AnomalySeverity, ConfidenceBand, EngineError,
    ForecastModel, Insight, InsightKind, MetricDescriptor, ModelDescriptor, PolyFit, Result,
    TrendLine,
};

use serde::{Deserialize, Serialize};

/// Configuration for forecast requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Model id to dispatch on (unknown ids fall back to linear)
    pub model: String,
    /// Forecast horizon in days
    pub horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: "linear_regression".to_string(),
            horizon: 7,
        }
    }
}

/// Configuration for anomaly detection thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// |z| above which a point is flagged
    pub flag_threshold: f64,
    /// |z| strictly above which a flagged point is critical
    pub critical_threshold: f64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            flag_threshold: 2.5,
            critical_threshold: 3.0,
        }
    }
}

/// Configuration for confidence intervals
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Confidence level; 0.95 and 0.99 are supported
    pub level: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self { level: 0.95 }
    }
}

/// Configuration for insight rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Comparison window in days
    pub week: usize,
    /// Percentage change beyond which the growth/decline rule fires
    pub trend_threshold_pct: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            week: 7,
            trend_threshold_pct: 10.0,
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnomalyConfig, ConfidenceConfig, ForecastConfig, InsightConfig};
    pub use foresight_core::{
        confidence_interval, detect_anomalies, forecast, forecast_with_confidence,
        generate_insights, metric_catalog, model_catalog, ForecastWithConfidence, ModelKind,
        ZScoreDetector,
    };
    pub use foresight_spi::{
        Anomaly, AnomalyKind, AnomalyScorer, AnomalySeverity, ConfidenceBand, EngineError,
        ForecastModel, Insight, InsightKind, MetricDescriptor, ModelDescriptor, Result,
    };
}
