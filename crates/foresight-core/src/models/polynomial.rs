//! Quadratic least-squares fit
//!
//! Fits `y = a·x² + b·x + c` through the degree-2 normal equations,
//! accumulated as power sums and solved by Cramer's rule. A singular
//! system falls back to the plain trend line, normalized behind
//! [`PolyFit`] so callers pattern-match instead of probing fields.

use crate::models::linear_regression::fit_trend;
use foresight_spi::{EngineError, ForecastModel, PolyFit, Result};
use serde::{Deserialize, Serialize};

/// Determinant guard below which the normal equations count as singular.
const SINGULARITY_EPS: f64 = 1e-10;

fn det3(
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
) -> f64 {
    m11 * (m22 * m33 - m23 * m32) - m12 * (m21 * m33 - m23 * m31)
        + m13 * (m21 * m32 - m22 * m31)
}

/// Fit a degree-2 polynomial over index-vs-value pairs.
///
/// Returns `None` for fewer than three points. A singular normal system
/// yields `PolyFit::Trend` via the OLS line fit.
pub fn fit_polynomial(data: &[f64]) -> Option<PolyFit> {
    if data.len() < 3 {
        return None;
    }

    let n = data.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_x3 = 0.0;
    let mut sum_x4 = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2y = 0.0;

    for (i, &y) in data.iter().enumerate() {
        let x = i as f64;
        let x2 = x * x;
        sum_x += x;
        sum_x2 += x2;
        sum_x3 += x2 * x;
        sum_x4 += x2 * x2;
        sum_y += y;
        sum_xy += x * y;
        sum_x2y += x2 * y;
    }

    // Normal equations for [c, b, a]:
    //   [ n      sum_x   sum_x2 ] [c]   [ sum_y   ]
    //   [ sum_x  sum_x2  sum_x3 ] [b] = [ sum_xy  ]
    //   [ sum_x2 sum_x3  sum_x4 ] [a]   [ sum_x2y ]
    let det = det3(n, sum_x, sum_x2, sum_x, sum_x2, sum_x3, sum_x2, sum_x3, sum_x4);
    if det.abs() < SINGULARITY_EPS {
        return fit_trend(data).map(PolyFit::Trend);
    }

    let det_c = det3(
        sum_y, sum_x, sum_x2, sum_xy, sum_x2, sum_x3, sum_x2y, sum_x3, sum_x4,
    );
    let det_b = det3(
        n, sum_y, sum_x2, sum_x, sum_xy, sum_x3, sum_x2, sum_x2y, sum_x4,
    );
    let det_a = det3(
        n, sum_x, sum_y, sum_x, sum_x2, sum_xy, sum_x2, sum_x3, sum_x2y,
    );

    Some(PolyFit::Quadratic {
        a: det_a / det,
        b: det_b / det,
        c: det_c / det,
    })
}

/// Quadratic model with linear fallback
///
/// # Example
///
/// ```rust
/// use foresight_core::models::PolynomialModel;
/// use foresight_core::ForecastModel;
///
/// // y = x²
/// let data = vec![0.0, 1.0, 4.0, 9.0, 16.0];
/// let mut model = PolynomialModel::new();
/// model.fit(&data).unwrap();
/// let forecast = model.predict(1).unwrap();
/// // Evaluated at x = 6
/// assert!((forecast[0] - 36.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolynomialModel {
    fit: Option<PolyFit>,
    n_observations: usize,
}

impl PolynomialModel {
    /// Create a new polynomial model
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fitted curve, if any
    pub fn fit_result(&self) -> Option<PolyFit> {
        self.fit
    }
}

impl ForecastModel for PolynomialModel {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fit = fit_polynomial(data);
        if self.fit.is_none() {
            return Err(EngineError::InsufficientData {
                required: 3,
                actual: data.len(),
            });
        }
        self.n_observations = data.len();
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        let fit = self.fit.ok_or(EngineError::NotFitted)?;

        Ok((1..=steps)
            .map(|step| fit.value_at((self.n_observations + step) as f64))
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }
}
