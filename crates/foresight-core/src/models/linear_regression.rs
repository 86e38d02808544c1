//! Linear regression for time series forecasting
//!
//! Uses ordinary least squares (OLS) to fit a straight trend line with the
//! day offset as the independent variable. The workhorse model of the
//! engine: it is the default for unrecognized model ids and the fallback
//! for degenerate quadratic fits.

use foresight_spi::{EngineError, ForecastModel, Result, TrendLine};
use serde::{Deserialize, Serialize};

/// Fit a trend line over index-vs-value pairs.
///
/// Returns `None` when fewer than two points are supplied. The OLS
/// denominator cannot vanish for indices 0..n-1, so no singularity guard
/// is needed here.
pub fn fit_trend(data: &[f64]) -> Option<TrendLine> {
    if data.len() < 2 {
        return None;
    }

    let n = data.len() as f64;
    let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
    let sum_y: f64 = data.iter().sum();
    let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
    let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

    let denominator = n * sum_t2 - sum_t * sum_t;
    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;

    Some(TrendLine { slope, intercept })
}

/// Linear regression model
///
/// Fits `y = intercept + slope * t` where `t` is the day offset.
///
/// # Example
///
/// ```rust
/// use foresight_core::models::LinearRegression;
/// use foresight_core::ForecastModel;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut model = LinearRegression::new();
/// model.fit(&data).unwrap();
/// let forecast = model.predict(2).unwrap();
/// assert_eq!(forecast, vec![7.0, 8.0]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    line: Option<TrendLine>,
    n_observations: usize,
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fitted trend line, if any
    pub fn line(&self) -> Option<TrendLine> {
        self.line
    }
}

impl ForecastModel for LinearRegression {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.line = fit_trend(data);
        if self.line.is_none() {
            return Err(EngineError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        self.n_observations = data.len();
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        let line = self.line.ok_or(EngineError::NotFitted)?;

        Ok((1..=steps)
            .map(|step| line.value_at((self.n_observations + step) as f64))
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.line.is_some()
    }
}
