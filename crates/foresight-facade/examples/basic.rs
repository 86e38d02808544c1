//! Basic example demonstrating the full metric pipeline
//!
//! Run with: cargo run --example basic -p foresight-facade

use foresight_facade::{
    confidence_interval, detect_anomalies, forecast, generate_insights, model_catalog,
    ModelKind,
};

fn main() {
    println!("=== foresight Basic Example ===\n");

    // Four weeks of daily upload counts, with one incident day
    let mut history: Vec<f64> = (0..28)
        .map(|i| 40.0 + (i as f64 * 0.5) + ((i % 7) as f64 * 2.0))
        .collect();
    history[17] = 2.0;

    println!("History ({} days): {:?}\n", history.len(), history);

    // 1. Forecast
    println!("1. Forecast (seasonal, 7 days)");
    let predictions = forecast(&history, ModelKind::Seasonal, 7);
    println!("   {:?}\n", predictions);

    // 2. Anomalies
    println!("2. Anomalies");
    for anomaly in detect_anomalies(&history) {
        println!(
            "   day {}: value {:.1}, z={:.2}, {:?} {:?}",
            anomaly.index, anomaly.value, anomaly.z_score, anomaly.severity, anomaly.kind
        );
    }
    println!();

    // 3. Confidence bands
    println!("3. Confidence bands (95%)");
    for band in confidence_interval(&predictions, 0.95) {
        println!(
            "   {:.2} in [{:.2}, {:.2}]",
            band.value, band.lower, band.upper
        );
    }
    println!();

    // 4. Insights
    println!("4. Insights");
    let anomalies = detect_anomalies(&history);
    for insight in generate_insights(&history, &predictions, &anomalies) {
        println!(
            "   [{:?}, {:.0}%] {}",
            insight.kind,
            insight.confidence * 100.0,
            insight.message
        );
        if let Some(action) = &insight.action {
            println!("     -> {}", action);
        }
    }
    println!();

    // 5. Catalog
    println!("5. Available models");
    for model in model_catalog() {
        println!(
            "   {} ({}) accuracy {}",
            model.display_name, model.id, model.accuracy_label
        );
    }

    println!("\n=== Example Complete ===");
}
