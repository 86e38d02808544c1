//! Anomaly scoring contract

use crate::error::Result;
use crate::model::Anomaly;

/// Common trait for statistical anomaly scorers
pub trait AnomalyScorer {
    /// Fit the scorer to a reference series
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Compute the anomaly score for each point
    fn score(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Detect anomalous points in the series
    fn detect(&self, data: &[f64]) -> Result<Vec<Anomaly>>;

    /// Check if the scorer has been fitted
    fn is_fitted(&self) -> bool;
}
