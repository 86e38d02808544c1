//! Confidence band model

use serde::{Deserialize, Serialize};

/// Lower/upper bound around one forecast point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    /// Point forecast
    pub value: f64,
    /// Lower bound, floored at 0
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl ConfidenceBand {
    /// Width of the band.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether the band contains its own point forecast.
    pub fn contains_value(&self) -> bool {
        self.lower <= self.value && self.value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_width() {
        let band = ConfidenceBand {
            value: 100.0,
            lower: 90.0,
            upper: 110.0,
        };
        assert_eq!(band.width(), 20.0);
        assert!(band.contains_value());
    }

    #[test]
    fn test_zero_width_band() {
        let band = ConfidenceBand {
            value: 5.0,
            lower: 5.0,
            upper: 5.0,
        };
        assert_eq!(band.width(), 0.0);
        assert!(band.contains_value());
    }
}
