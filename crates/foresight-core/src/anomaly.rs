//! Z-score anomaly detection
//!
//! Scores every observation against the population mean and standard
//! deviation of its own series. Points beyond the flag threshold become
//! [`Anomaly`] records typed as spikes or drops, escalating to critical
//! severity strictly above the critical threshold.

use foresight_spi::{
    Anomaly, AnomalyKind, AnomalyScorer, AnomalySeverity, EngineError, Result,
};
use serde::{Deserialize, Serialize};

/// |z| above which a point is flagged.
pub const FLAG_THRESHOLD: f64 = 2.5;
/// |z| strictly above which a flagged point is critical.
pub const CRITICAL_THRESHOLD: f64 = 3.0;

/// Minimum series length for anomaly detection.
pub const MIN_HISTORY: usize = 3;

/// Z-score based anomaly scorer
///
/// Uses the population standard deviation (divide by n) of the fitted
/// series. A constant series has zero spread, so nothing can be scored
/// against it and detection yields no anomalies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZScoreDetector {
    flag_threshold: f64,
    critical_threshold: f64,
    mean: f64,
    std_dev: f64,
    fitted: bool,
}

impl ZScoreDetector {
    /// Create a new detector
    ///
    /// # Arguments
    ///
    /// * `flag_threshold` - |z| above which a point is flagged
    /// * `critical_threshold` - |z| strictly above which severity escalates
    pub fn new(flag_threshold: f64, critical_threshold: f64) -> Result<Self> {
        if flag_threshold <= 0.0 {
            return Err(EngineError::InvalidParameter {
                name: "flag_threshold".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if critical_threshold < flag_threshold {
            return Err(EngineError::InvalidParameter {
                name: "critical_threshold".to_string(),
                reason: "must not be below flag_threshold".to_string(),
            });
        }

        Ok(Self {
            flag_threshold,
            critical_threshold,
            mean: 0.0,
            std_dev: 0.0,
            fitted: false,
        })
    }

    /// Get the fitted mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the fitted population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        Self {
            flag_threshold: FLAG_THRESHOLD,
            critical_threshold: CRITICAL_THRESHOLD,
            mean: 0.0,
            std_dev: 0.0,
            fitted: false,
        }
    }
}

impl AnomalyScorer for ZScoreDetector {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(EngineError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let n = data.len() as f64;
        self.mean = data.iter().sum::<f64>() / n;
        self.std_dev = (data.iter().map(|x| (x - self.mean).powi(2)).sum::<f64>() / n).sqrt();
        self.fitted = true;
        Ok(())
    }

    fn score(&self, data: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(EngineError::NotFitted);
        }

        if self.std_dev == 0.0 {
            return Ok(vec![0.0; data.len()]);
        }

        Ok(data
            .iter()
            .map(|&x| (x - self.mean) / self.std_dev)
            .collect())
    }

    fn detect(&self, data: &[f64]) -> Result<Vec<Anomaly>> {
        let scores = self.score(data)?;

        Ok(scores
            .iter()
            .enumerate()
            .filter(|(_, &z)| z.abs() > self.flag_threshold)
            .map(|(index, &z)| Anomaly {
                index,
                value: data[index],
                z_score: z,
                severity: if z.abs() > self.critical_threshold {
                    AnomalySeverity::Critical
                } else {
                    AnomalySeverity::Warning
                },
                kind: if z > 0.0 {
                    AnomalyKind::Spike
                } else {
                    AnomalyKind::Drop
                },
            })
            .collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Detect statistical outliers in a historical series.
///
/// Fits the default z-score detector to the series itself and returns
/// every flagged point. Series shorter than three points yield an empty
/// list, as does a constant series.
pub fn detect_anomalies(series: &[f64]) -> Vec<Anomaly> {
    if series.len() < MIN_HISTORY {
        return Vec::new();
    }

    let mut detector = ZScoreDetector::default();
    if detector.fit(series).is_err() {
        return Vec::new();
    }
    detector.detect(series).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example_exact_threshold() {
        // mean 9.5, population stddev 13.5, z at index 9 is exactly 3.0:
        // flagged (|z| > 2.5) but warning, not critical (3.0 is not > 3).
        let series = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 50.0];
        let anomalies = detect_anomalies(&series);

        assert_eq!(anomalies.len(), 1);
        let anomaly = &anomalies[0];
        assert_eq!(anomaly.index, 9);
        assert_eq!(anomaly.value, 50.0);
        assert!((anomaly.z_score - 3.0).abs() < 1e-10);
        assert_eq!(anomaly.severity, AnomalySeverity::Warning);
        assert_eq!(anomaly.kind, AnomalyKind::Spike);
    }

    #[test]
    fn test_drop_detection() {
        let mut series = vec![100.0; 20];
        series[7] = 0.0;
        let anomalies = detect_anomalies(&series);

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].index, 7);
        assert_eq!(anomalies[0].kind, AnomalyKind::Drop);
        assert_eq!(anomalies[0].severity, AnomalySeverity::Critical);
    }

    #[test]
    fn test_constant_series_yields_nothing() {
        assert!(detect_anomalies(&[5.0; 30]).is_empty());
    }

    #[test]
    fn test_short_series_yields_nothing() {
        assert!(detect_anomalies(&[]).is_empty());
        assert!(detect_anomalies(&[1.0, 100.0]).is_empty());
    }

    #[test]
    fn test_clean_series_has_no_false_positives() {
        let series: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.1)).collect();
        assert!(detect_anomalies(&series).is_empty());
    }

    #[test]
    fn test_scores_match_hand_computation() {
        let mut detector = ZScoreDetector::default();
        detector.fit(&[0.0, 10.0]).unwrap();
        // mean 5, population stddev 5
        let scores = detector.score(&[0.0, 10.0]).unwrap();
        assert!((scores[0] + 1.0).abs() < 1e-10);
        assert!((scores[1] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ZScoreDetector::new(0.0, 3.0).is_err());
        assert!(ZScoreDetector::new(3.0, 2.5).is_err());
        assert!(ZScoreDetector::new(2.5, 3.0).is_ok());
    }

    #[test]
    fn test_unfitted_detect_errors() {
        let detector = ZScoreDetector::default();
        assert!(matches!(
            detector.detect(&[1.0, 2.0]),
            Err(EngineError::NotFitted)
        ));
    }
}
