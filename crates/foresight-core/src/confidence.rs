//! Confidence intervals for forecast sequences
//!
//! Bounds each forecast point with a symmetric margin derived from the
//! spread of the forecast sequence itself. Only the 95% and 99% levels
//! are supported; any level other than 0.95 is served with the 99%
//! z-score.

use foresight_spi::ConfidenceBand;

/// Supported confidence levels and their z-scores.
const Z_95: f64 = 1.96;
const Z_99: f64 = 2.58;

fn z_score(level: f64) -> f64 {
    if (level - 0.95).abs() < 1e-9 {
        Z_95
    } else {
        Z_99
    }
}

/// Wrap a forecast sequence with per-point lower/upper bounds.
///
/// The margin is `z * population stddev` of the forecast values; lower
/// bounds are floored at zero. An empty forecast yields no bands.
pub fn confidence_interval(forecast: &[f64], level: f64) -> Vec<ConfidenceBand> {
    if forecast.is_empty() {
        return Vec::new();
    }

    let n = forecast.len() as f64;
    let mean = forecast.iter().sum::<f64>() / n;
    let std_dev = (forecast.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    let margin = z_score(level) * std_dev;

    forecast
        .iter()
        .map(|&value| ConfidenceBand {
            value,
            lower: (value - margin).max(0.0),
            upper: value + margin,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_containment() {
        let forecast = vec![10.0, 12.0, 14.0, 16.0];
        for band in confidence_interval(&forecast, 0.95) {
            assert!(band.lower <= band.value);
            assert!(band.value <= band.upper);
            assert!(band.lower >= 0.0);
        }
    }

    #[test]
    fn test_margin_uses_forecast_spread() {
        // Forecast [0, 10]: mean 5, population stddev 5, margin 1.96*5
        let bands = confidence_interval(&[0.0, 10.0], 0.95);
        assert!((bands[1].upper - (10.0 + 9.8)).abs() < 1e-10);
        // Lower bound of the 0-point is floored
        assert_eq!(bands[0].lower, 0.0);
    }

    #[test]
    fn test_99_is_wider_than_95() {
        let forecast = vec![10.0, 20.0, 30.0];
        let narrow = confidence_interval(&forecast, 0.95);
        let wide = confidence_interval(&forecast, 0.99);
        assert!(wide[0].width() > narrow[0].width());
    }

    #[test]
    fn test_unsupported_level_treated_as_99() {
        let forecast = vec![10.0, 20.0, 30.0];
        let ninety_nine = confidence_interval(&forecast, 0.99);
        let eighty = confidence_interval(&forecast, 0.80);
        assert_eq!(ninety_nine[0].width(), eighty[0].width());
    }

    #[test]
    fn test_flat_forecast_collapses_bands() {
        let bands = confidence_interval(&[7.0, 7.0, 7.0], 0.95);
        for band in bands {
            assert_eq!(band.lower, 7.0);
            assert_eq!(band.upper, 7.0);
        }
    }

    #[test]
    fn test_empty_forecast_yields_no_bands() {
        assert!(confidence_interval(&[], 0.95).is_empty());
    }
}
