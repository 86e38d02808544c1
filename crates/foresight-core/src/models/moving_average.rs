//! Trailing moving average for time series smoothing and forecasting
//!
//! Smooths a series with a fixed-window trailing mean. Positions before
//! the first full window pass through the raw observation, so the output
//! always has the same length as the input.

use foresight_spi::{EngineError, ForecastModel, Result};
use serde::{Deserialize, Serialize};

/// Default window size used by the forecasting dispatch.
pub const DEFAULT_WINDOW: usize = 7;

/// Smooth a series with a trailing mean of `window` values.
///
/// For index `k < window - 1` the raw value passes through unchanged;
/// from `k >= window - 1` the output is the mean of the `window` values
/// ending at `k`. Series shorter than the window are returned unchanged.
pub fn moving_average_smooth(data: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || data.len() < window {
        return data.to_vec();
    }

    data.iter()
        .enumerate()
        .map(|(k, &value)| {
            if k + 1 < window {
                value
            } else {
                let start = k + 1 - window;
                data[start..=k].iter().sum::<f64>() / window as f64
            }
        })
        .collect()
}

/// Trailing moving average model
///
/// The forecast is flat: the mean of the trailing window of smoothed
/// values, repeated for every step.
///
/// # Example
///
/// ```rust
/// use foresight_core::models::MovingAverage;
/// use foresight_core::ForecastModel;
///
/// let data = vec![10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0];
/// let mut model = MovingAverage::new(7).unwrap();
/// model.fit(&data).unwrap();
/// let forecast = model.predict(3).unwrap();
/// assert_eq!(forecast.len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovingAverage {
    /// Window size for averaging
    window: usize,
    /// Smoothed values after fitting
    smoothed: Vec<f64>,
    /// Whether model has been fitted
    fitted: bool,
}

impl MovingAverage {
    /// Create a new moving average model
    ///
    /// # Arguments
    ///
    /// * `window` - Number of observations to average (must be >= 2)
    pub fn new(window: usize) -> Result<Self> {
        if window < 2 {
            return Err(EngineError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            window,
            smoothed: Vec::new(),
            fitted: false,
        })
    }

    /// Get window size
    pub fn window_size(&self) -> usize {
        self.window
    }

    /// Get the smoothed series
    pub fn smoothed_values(&self) -> &[f64] {
        &self.smoothed
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            smoothed: Vec::new(),
            fitted: false,
        }
    }
}

impl ForecastModel for MovingAverage {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(EngineError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        // Short series fall through the smoother unchanged; the trailing
        // mean below then covers whatever history exists.
        self.smoothed = moving_average_smooth(data, self.window);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(EngineError::NotFitted);
        }

        let tail_len = self.window.min(self.smoothed.len());
        let tail = &self.smoothed[self.smoothed.len() - tail_len..];
        let level = tail.iter().sum::<f64>() / tail_len as f64;

        Ok(vec![level; steps])
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_passes_through() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let smoothed = moving_average_smooth(&data, 3);
        assert_eq!(smoothed[0], 1.0);
        assert_eq!(smoothed[1], 2.0);
        // First full window: (1+2+3)/3
        assert!((smoothed[2] - 2.0).abs() < 1e-10);
        assert!((smoothed[3] - 3.0).abs() < 1e-10);
        assert!((smoothed[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_short_series_unchanged() {
        let data = vec![1.0, 2.0, 3.0];
        assert_eq!(moving_average_smooth(&data, 7), data);
    }

    #[test]
    fn test_output_length_matches_input() {
        let data: Vec<f64> = (0..30).map(|i| i as f64).collect();
        assert_eq!(moving_average_smooth(&data, 7).len(), data.len());
    }

    #[test]
    fn test_flat_forecast() {
        let data: Vec<f64> = (1..=14).map(|i| i as f64).collect();
        let mut model = MovingAverage::new(7).unwrap();
        model.fit(&data).unwrap();

        let forecast = model.predict(5).unwrap();
        assert_eq!(forecast.len(), 5);
        // Every step repeats the same level
        for value in &forecast {
            assert!((value - forecast[0]).abs() < 1e-10);
        }
    }

    #[test]
    fn test_window_shorter_than_two_rejected() {
        assert!(MovingAverage::new(0).is_err());
        assert!(MovingAverage::new(1).is_err());
        assert!(MovingAverage::new(2).is_ok());
    }

    #[test]
    fn test_fit_below_window_uses_raw_tail() {
        // 3 points under a 7-wide window: smoothing passes through,
        // the forecast level is the plain mean.
        let mut model = MovingAverage::new(7).unwrap();
        model.fit(&[3.0, 6.0, 9.0]).unwrap();
        let forecast = model.predict(2).unwrap();
        assert!((forecast[0] - 6.0).abs() < 1e-10);
        assert!((forecast[1] - 6.0).abs() < 1e-10);
    }
}
