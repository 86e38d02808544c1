//! Performance benchmarks for the foresight engine

use std::hint::black_box;
use std::time::Instant;

use foresight_facade::{
    confidence_interval, detect_anomalies, forecast, generate_insights, ModelKind,
};

fn generate_data(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + (t * 0.1).sin() * 10.0 + (t % 7.0)
        })
        .collect()
}

fn bench<F, R>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut() -> R,
{
    // Warmup
    for _ in 0..3 {
        black_box(f());
    }

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Foresight Performance Benchmarks ===\n");

    let data_1k = generate_data(1_000);
    let data_10k = generate_data(10_000);

    println!("--- Forecast (horizon 30) ---");
    for kind in [
        ModelKind::LinearRegression,
        ModelKind::ExponentialSmoothing,
        ModelKind::MovingAverage,
        ModelKind::Seasonal,
        ModelKind::Polynomial,
    ] {
        bench(&format!("{} (1K)", kind.id()), 1000, || {
            forecast(&data_1k, kind, 30)
        });
    }

    println!("\n--- Anomaly detection ---");
    bench("detect (1K)", 1000, || detect_anomalies(&data_1k));
    bench("detect (10K)", 100, || detect_anomalies(&data_10k));

    println!("\n--- Confidence + insights ---");
    let predictions = forecast(&data_1k, ModelKind::LinearRegression, 30);
    let anomalies = detect_anomalies(&data_1k);
    bench("confidence (30 pts)", 10_000, || {
        confidence_interval(&predictions, 0.95)
    });
    bench("insights (1K history)", 1000, || {
        generate_insights(&data_1k, &predictions, &anomalies)
    });
}
