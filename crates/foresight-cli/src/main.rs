//! # foresight-cli
//!
//! Command-line interface for the foresight forecasting engine.
//! Input files contain a JSON array of daily counts, oldest first.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use foresight_facade::{
    confidence_interval, detect_anomalies, forecast, generate_insights, metric_catalog,
    model_catalog, ModelKind,
};

#[derive(Parser)]
#[command(name = "foresight")]
#[command(about = "Usage-metric forecasting and anomaly detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a forecast from historical counts
    Forecast {
        /// Input file (JSON array of daily values)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of days to forecast
        #[arg(short, long, default_value = "7")]
        steps: usize,

        /// Model id (linear_regression, exponential_smoothing,
        /// moving_average, seasonal, polynomial)
        #[arg(short, long, default_value = "linear_regression")]
        model: String,

        /// Confidence level for the bands
        #[arg(short, long, default_value = "0.95")]
        level: f64,
    },

    /// Detect anomalies in historical counts
    Detect {
        /// Input file (JSON array of daily values)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate insights from history, forecast, and anomalies
    Insights {
        /// Input file (JSON array of daily values)
        #[arg(short, long)]
        input: PathBuf,

        /// Number of days to forecast
        #[arg(short, long, default_value = "7")]
        steps: usize,

        /// Model id for the underlying forecast
        #[arg(short, long, default_value = "linear_regression")]
        model: String,
    },

    /// List the model and metric catalogs
    Models,
}

fn read_series(path: &PathBuf) -> Result<Vec<f64>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("cannot read {:?}: {}", path, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("cannot parse {:?}: {}", path, e))
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Forecast {
            input,
            steps,
            model,
            level,
        } => {
            let series = read_series(&input)?;
            let kind = ModelKind::parse(&model);
            let predictions = forecast(&series, kind, steps);
            let bands = confidence_interval(&predictions, level);

            let output = serde_json::json!({
                "model": kind.id(),
                "forecast": predictions,
                "bands": bands,
            });
            println!("{}", serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?);
        }
        Commands::Detect { input } => {
            let series = read_series(&input)?;
            let anomalies = detect_anomalies(&series);
            println!(
                "{}",
                serde_json::to_string_pretty(&anomalies).map_err(|e| e.to_string())?
            );
        }
        Commands::Insights {
            input,
            steps,
            model,
        } => {
            let series = read_series(&input)?;
            let kind = ModelKind::parse(&model);
            let predictions = forecast(&series, kind, steps);
            let anomalies = detect_anomalies(&series);
            let insights = generate_insights(&series, &predictions, &anomalies);
            println!(
                "{}",
                serde_json::to_string_pretty(&insights).map_err(|e| e.to_string())?
            );
        }
        Commands::Models => {
            let output = serde_json::json!({
                "models": model_catalog(),
                "metrics": metric_catalog(),
            });
            println!("{}", serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
