//! Weekly-phase seasonal model
//!
//! Extracts one average per phase of a repeating period (7 days in the
//! dispatch) and combines it multiplicatively with a linear trend: the
//! forecast at day `t` is the trend value at `t` scaled by the ratio of
//! the phase average to the overall series mean.

use crate::models::linear_regression::fit_trend;
use foresight_spi::{EngineError, ForecastModel, Result, TrendLine};
use serde::{Deserialize, Serialize};

/// Default season length used by the forecasting dispatch.
pub const DEFAULT_SEASON_LEN: usize = 7;

/// Average every value at the same phase of the period.
///
/// Returns one average per phase in `0..season_len`. A series shorter
/// than two full seasons is returned unchanged, so callers must check the
/// output length before treating it as per-phase averages.
pub fn seasonal_averages(data: &[f64], season_len: usize) -> Vec<f64> {
    if season_len == 0 || data.len() < 2 * season_len {
        return data.to_vec();
    }

    (0..season_len)
        .map(|phase| {
            let values: Vec<f64> = data
                .iter()
                .skip(phase)
                .step_by(season_len)
                .copied()
                .collect();
            values.iter().sum::<f64>() / values.len() as f64
        })
        .collect()
}

/// Seasonal model combining a linear trend with per-phase factors
///
/// Seasonal factors are the per-phase averages divided by the overall
/// mean. When the history is too short for a full decomposition (or the
/// mean is zero) the factors degenerate to 1.0 and the forecast falls
/// back to the bare trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalModel {
    /// Period of the repeating pattern
    season_len: usize,
    /// Per-phase multiplicative factors; empty when degenerate
    factors: Vec<f64>,
    /// Underlying trend line
    trend: Option<TrendLine>,
    /// Number of observations used in fitting
    n_observations: usize,
}

impl SeasonalModel {
    /// Create a new seasonal model
    ///
    /// # Arguments
    ///
    /// * `season_len` - Number of observations per seasonal cycle (must be >= 2)
    pub fn new(season_len: usize) -> Result<Self> {
        if season_len < 2 {
            return Err(EngineError::InvalidParameter {
                name: "season_len".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            season_len,
            factors: Vec::new(),
            trend: None,
            n_observations: 0,
        })
    }

    /// Get the per-phase multiplicative factors (empty when degenerate)
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// Get the underlying trend line, if fitted
    pub fn trend(&self) -> Option<TrendLine> {
        self.trend
    }
}

impl Default for SeasonalModel {
    fn default() -> Self {
        Self {
            season_len: DEFAULT_SEASON_LEN,
            factors: Vec::new(),
            trend: None,
            n_observations: 0,
        }
    }
}

impl ForecastModel for SeasonalModel {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.trend = fit_trend(data);
        if self.trend.is_none() {
            return Err(EngineError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }
        self.n_observations = data.len();

        let averages = seasonal_averages(data, self.season_len);
        let mean = data.iter().sum::<f64>() / data.len() as f64;

        self.factors = if averages.len() == self.season_len && mean != 0.0 {
            averages.iter().map(|avg| avg / mean).collect()
        } else {
            // Degenerate decomposition: forecast on the bare trend
            Vec::new()
        };

        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        let trend = self.trend.ok_or(EngineError::NotFitted)?;

        Ok((1..=steps)
            .map(|step| {
                let t = self.n_observations + step;
                let phase = (t - 1) % self.season_len;
                let factor = self.factors.get(phase).copied().unwrap_or(1.0);
                trend.value_at(t as f64) * factor
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.trend.is_some()
    }
}
