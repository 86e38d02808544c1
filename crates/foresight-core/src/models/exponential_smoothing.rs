//! Exponential smoothing for time series forecasting
//!
//! Assigns exponentially decreasing weights to past observations:
//! `S_t = α * Y_t + (1 - α) * S_{t-1}`, seeded with `S_0 = Y_0`.
//! Higher `alpha` reacts faster to recent changes; 0.3 is the default
//! used by the forecasting dispatch.

use foresight_spi::{EngineError, ForecastModel, Result};
use serde::{Deserialize, Serialize};

/// Default smoothing factor used by the dispatch.
pub const DEFAULT_ALPHA: f64 = 0.3;

/// Smooth a series with the exponential recurrence.
///
/// Series shorter than two points are returned unchanged.
pub fn exponential_smooth(data: &[f64], alpha: f64) -> Vec<f64> {
    if data.len() < 2 {
        return data.to_vec();
    }

    let mut level = data[0];
    let mut smoothed = Vec::with_capacity(data.len());
    smoothed.push(level);

    for &value in &data[1..] {
        level = alpha * value + (1.0 - alpha) * level;
        smoothed.push(level);
    }

    smoothed
}

/// Exponential smoothing model
///
/// Keeps the full smoothed series and projects forward with the one-step
/// trend between its last two values.
///
/// # Example
///
/// ```rust
/// use foresight_core::models::ExponentialSmoothing;
/// use foresight_core::ForecastModel;
///
/// let data = vec![10.0, 20.0, 30.0];
/// let mut model = ExponentialSmoothing::new(0.3).unwrap();
/// model.fit(&data).unwrap();
/// // [10, 0.3*20 + 0.7*10, 0.3*30 + 0.7*13] = [10, 13, 18.1]
/// assert!((model.smoothed_values()[2] - 18.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExponentialSmoothing {
    /// Smoothing parameter (0 < alpha < 1)
    alpha: f64,
    /// Smoothed series after fitting
    smoothed: Vec<f64>,
    /// Whether model has been fitted
    fitted: bool,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    ///
    /// # Arguments
    ///
    /// * `alpha` - Smoothing parameter (0 < alpha < 1)
    pub fn new(alpha: f64) -> Result<Self> {
        if !(0.0 < alpha && alpha < 1.0) {
            return Err(EngineError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            });
        }

        Ok(Self {
            alpha,
            smoothed: Vec::new(),
            fitted: false,
        })
    }

    /// Get alpha parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Get the smoothed series
    pub fn smoothed_values(&self) -> &[f64] {
        &self.smoothed
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            smoothed: Vec::new(),
            fitted: false,
        }
    }
}

impl ForecastModel for ExponentialSmoothing {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(EngineError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        self.smoothed = exponential_smooth(data, self.alpha);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(EngineError::NotFitted);
        }

        let last = self.smoothed[self.smoothed.len() - 1];
        let second_to_last = self.smoothed[self.smoothed.len() - 2];
        let trend = last - second_to_last;

        Ok((1..=steps).map(|step| last + trend * step as f64).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothing_recurrence() {
        // 0.3*20 + 0.7*10 = 13; 0.3*30 + 0.7*13 = 18.1
        let smoothed = exponential_smooth(&[10.0, 20.0, 30.0], 0.3);
        assert!((smoothed[0] - 10.0).abs() < 1e-10);
        assert!((smoothed[1] - 13.0).abs() < 1e-10);
        assert!((smoothed[2] - 18.1).abs() < 1e-10);
    }

    #[test]
    fn test_short_series_unchanged() {
        assert_eq!(exponential_smooth(&[7.0], 0.3), vec![7.0]);
        assert!(exponential_smooth(&[], 0.3).is_empty());
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        assert!(ExponentialSmoothing::new(0.0).is_err());
        assert!(ExponentialSmoothing::new(1.0).is_err());
        assert!(ExponentialSmoothing::new(-0.5).is_err());
        assert!(ExponentialSmoothing::new(0.3).is_ok());
    }

    #[test]
    fn test_predict_extends_last_step_trend() {
        let mut model = ExponentialSmoothing::new(0.3).unwrap();
        model.fit(&[10.0, 20.0, 30.0]).unwrap();

        // trend = 18.1 - 13.0 = 5.1
        let forecast = model.predict(3).unwrap();
        assert!((forecast[0] - 23.2).abs() < 1e-10);
        assert!((forecast[1] - 28.3).abs() < 1e-10);
        assert!((forecast[2] - 33.4).abs() < 1e-10);
    }

    #[test]
    fn test_constant_series_flat_forecast() {
        let mut model = ExponentialSmoothing::new(0.3).unwrap();
        model.fit(&[5.0, 5.0, 5.0, 5.0]).unwrap();
        let forecast = model.predict(2).unwrap();
        assert!((forecast[0] - 5.0).abs() < 1e-10);
        assert!((forecast[1] - 5.0).abs() < 1e-10);
    }
}
