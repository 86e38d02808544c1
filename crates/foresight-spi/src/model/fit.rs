//! Fitted-curve result types.

use serde::{Deserialize, Serialize};

/// Ordinary least-squares line fit over index-vs-value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    /// Trend per time unit
    pub slope: f64,
    /// Value at index 0
    pub intercept: f64,
}

impl TrendLine {
    /// Evaluate the line at time index `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }
}

/// Result of a degree-2 least-squares fit.
///
/// A quadratic fit degenerates to a plain trend line when the normal
/// equations are singular, so callers pattern-match instead of probing
/// for coefficient fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PolyFit {
    /// y = a·x² + b·x + c
    Quadratic { a: f64, b: f64, c: f64 },
    /// Linear fallback for a degenerate quadratic system
    Trend(TrendLine),
}

impl PolyFit {
    /// Evaluate the fitted curve at time index `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            PolyFit::Quadratic { a, b, c } => a * x * x + b * x + c,
            PolyFit::Trend(line) => line.value_at(x),
        }
    }
}
