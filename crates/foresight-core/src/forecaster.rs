//! Model dispatch and the forecast boundary operation
//!
//! Callers pick a model by id string; the dispatch resolves it to a
//! [`ModelKind`] with an explicit default arm (unknown ids forecast with
//! linear regression, by policy rather than by error) and runs the fitted
//! model over the requested horizon. Every prediction is clamped at zero
//! and rounded to two decimals before leaving the engine.

use crate::confidence::confidence_interval;
use crate::models::{
    ExponentialSmoothing, LinearRegression, MovingAverage, PolynomialModel, SeasonalModel,
};
use foresight_spi::{ConfidenceBand, ForecastModel};
use serde::{Deserialize, Serialize};

/// Minimum history length for any forecast.
pub const MIN_HISTORY: usize = 3;

/// The forecasting models the engine dispatches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LinearRegression,
    ExponentialSmoothing,
    MovingAverage,
    Seasonal,
    Polynomial,
}

impl ModelKind {
    /// Resolve a model id string.
    ///
    /// Unrecognized ids resolve to `LinearRegression`; the caller-facing
    /// catalog only advertises the five known ids, and anything else is
    /// served by the default model rather than rejected.
    pub fn parse(id: &str) -> Self {
        match id {
            "exponential_smoothing" => ModelKind::ExponentialSmoothing,
            "moving_average" => ModelKind::MovingAverage,
            "seasonal" => ModelKind::Seasonal,
            "polynomial" => ModelKind::Polynomial,
            _ => ModelKind::LinearRegression,
        }
    }

    /// Stable id string for this model.
    pub fn id(&self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "linear_regression",
            ModelKind::ExponentialSmoothing => "exponential_smoothing",
            ModelKind::MovingAverage => "moving_average",
            ModelKind::Seasonal => "seasonal",
            ModelKind::Polynomial => "polynomial",
        }
    }
}

/// Point forecast bundled with its confidence bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastWithConfidence {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// One band per forecast point
    pub bands: Vec<ConfidenceBand>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

/// Forecast `horizon` steps ahead with the chosen model.
///
/// Histories shorter than three points yield an empty forecast. Values
/// are clamped at zero and rounded to two decimal places.
pub fn forecast(series: &[f64], kind: ModelKind, horizon: usize) -> Vec<f64> {
    if series.len() < MIN_HISTORY {
        return Vec::new();
    }

    let raw = match kind {
        ModelKind::LinearRegression => run(LinearRegression::new(), series, horizon),
        ModelKind::ExponentialSmoothing => run(ExponentialSmoothing::default(), series, horizon),
        ModelKind::MovingAverage => run(MovingAverage::default(), series, horizon),
        ModelKind::Seasonal => run(SeasonalModel::default(), series, horizon),
        ModelKind::Polynomial => run(PolynomialModel::new(), series, horizon),
    };

    raw.into_iter().map(|v| round2(v.max(0.0))).collect()
}

/// Forecast and wrap the result with confidence bands in one call.
pub fn forecast_with_confidence(
    series: &[f64],
    kind: ModelKind,
    horizon: usize,
    level: f64,
) -> ForecastWithConfidence {
    let forecast = forecast(series, kind, horizon);
    let bands = confidence_interval(&forecast, level);
    ForecastWithConfidence {
        forecast,
        bands,
        confidence_level: level,
    }
}

fn run<M: ForecastModel>(mut model: M, series: &[f64], steps: usize) -> Vec<f64> {
    if model.fit(series).is_err() {
        return Vec::new();
    }
    model.predict(steps).unwrap_or_default()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_forecast_worked_example() {
        let forecast = forecast(&[1.0, 2.0, 3.0, 4.0, 5.0], ModelKind::LinearRegression, 2);
        assert_eq!(forecast, vec![7.0, 8.0]);
    }

    #[test]
    fn test_unknown_id_falls_back_to_linear() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0];
        let fallback = forecast(&series, ModelKind::parse("gradient_boosting"), 3);
        let linear = forecast(&series, ModelKind::LinearRegression, 3);
        assert_eq!(fallback, linear);
    }

    #[test]
    fn test_short_history_yields_empty() {
        assert!(forecast(&[1.0, 2.0], ModelKind::LinearRegression, 5).is_empty());
        assert!(forecast(&[], ModelKind::Seasonal, 5).is_empty());
    }

    #[test]
    fn test_predictions_clamped_at_zero() {
        // Steeply falling series: raw projections go negative
        let series = [50.0, 40.0, 30.0, 20.0, 10.0];
        let forecast = forecast(&series, ModelKind::LinearRegression, 6);
        assert_eq!(forecast.len(), 6);
        for value in &forecast {
            assert!(*value >= 0.0);
        }
        // The far end of the horizon is fully clamped
        assert_eq!(forecast[5], 0.0);
    }

    #[test]
    fn test_predictions_rounded_to_two_decimals() {
        let series = [10.0, 20.0, 30.0];
        let forecast = forecast(&series, ModelKind::ExponentialSmoothing, 4);
        for value in &forecast {
            assert!((value * 100.0 - (value * 100.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_every_model_produces_horizon_length() {
        let series: Vec<f64> = (0..20).map(|i| 10.0 + (i % 7) as f64).collect();
        for kind in [
            ModelKind::LinearRegression,
            ModelKind::ExponentialSmoothing,
            ModelKind::MovingAverage,
            ModelKind::Seasonal,
            ModelKind::Polynomial,
        ] {
            assert_eq!(forecast(&series, kind, 7).len(), 7, "model {:?}", kind);
        }
    }

    #[test]
    fn test_parse_round_trips_known_ids() {
        for kind in [
            ModelKind::LinearRegression,
            ModelKind::ExponentialSmoothing,
            ModelKind::MovingAverage,
            ModelKind::Seasonal,
            ModelKind::Polynomial,
        ] {
            assert_eq!(ModelKind::parse(kind.id()), kind);
        }
    }

    #[test]
    fn test_forecast_with_confidence_bundles_bands() {
        let series: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let result = forecast_with_confidence(&series, ModelKind::LinearRegression, 5, 0.95);
        assert_eq!(result.forecast.len(), 5);
        assert_eq!(result.bands.len(), 5);
        assert_eq!(result.confidence_level, 0.95);
    }
}
