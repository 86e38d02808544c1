//! Rule-based insight generation
//!
//! Synthesizes short human-readable messages from the combination of
//! history, forecast, and detected anomalies. Rules fire independently;
//! each carries a fixed confidence, never one computed from the data.

use foresight_spi::{Anomaly, Insight, InsightKind};

/// Window of the week-over-week comparison, in days.
pub const WEEK: usize = 7;
/// Percentage change beyond which the growth/decline rule fires.
pub const TREND_THRESHOLD_PCT: f64 = 10.0;

const GROWTH_CONFIDENCE: f64 = 0.85;
const DECLINE_CONFIDENCE: f64 = 0.80;
const ANOMALY_CONFIDENCE: f64 = 0.90;
const FORECAST_CONFIDENCE: f64 = 0.75;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Synthesize insights from history, forecast, and anomalies.
///
/// Three independent rules:
///
/// 1. week-over-week growth/decline beyond ±10%, only when two full
///    weeks of history exist and the prior week is non-zero;
/// 2. a summary of detected anomalies, when any;
/// 3. a forecast outlook comparing the expected average against the
///    recent week, whenever a forecast is present.
pub fn generate_insights(
    history: &[f64],
    forecast: &[f64],
    anomalies: &[Anomaly],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if history.len() >= 2 * WEEK {
        let recent = mean(&history[history.len() - WEEK..]);
        let previous = mean(&history[history.len() - 2 * WEEK..history.len() - WEEK]);

        // A zero prior week has no percentage base; skip the rule
        if previous != 0.0 {
            let change = (recent - previous) / previous * 100.0;
            if change > TREND_THRESHOLD_PCT {
                insights.push(Insight::new(
                    InsightKind::Growth,
                    format!("Activity is up {:.1}% compared to the previous week", change),
                    GROWTH_CONFIDENCE,
                ));
            } else if change < -TREND_THRESHOLD_PCT {
                insights.push(
                    Insight::new(
                        InsightKind::Decline,
                        format!(
                            "Activity is down {:.1}% compared to the previous week",
                            change.abs()
                        ),
                        DECLINE_CONFIDENCE,
                    )
                    .with_action("Review recent changes that may have reduced usage"),
                );
            }
        }
    }

    if !anomalies.is_empty() {
        let message = if anomalies.len() == 1 {
            "1 day with unusual activity detected in the history".to_string()
        } else {
            format!(
                "{} days with unusual activity detected in the history",
                anomalies.len()
            )
        };
        insights.push(
            Insight::new(InsightKind::Anomaly, message, ANOMALY_CONFIDENCE)
                .with_action("Review the flagged days for data quality issues"),
        );
    }

    if !forecast.is_empty() {
        let expected = mean(forecast);
        let recent = mean(&history[history.len().saturating_sub(WEEK)..]);

        let message = if recent != 0.0 {
            let change = (expected - recent) / recent * 100.0;
            let direction = if change >= 0.0 { "up" } else { "down" };
            format!(
                "Expecting an average of {:.1} per day, {} {:.1}% versus the recent week",
                expected,
                direction,
                change.abs()
            )
        } else {
            format!(
                "Expecting an average of {:.1} per day over the forecast window",
                expected
            )
        };
        insights.push(Insight::new(InsightKind::Forecast, message, FORECAST_CONFIDENCE));
    }

    insights
}
