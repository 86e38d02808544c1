//! Foresight Facade
//!
//! High-level API for the usage-metric forecasting engine. Re-exports the
//! full public surface for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use foresight_api::*;

// Explicit re-exports for documentation
pub use foresight_api::prelude;

// Re-export core modules for direct access
pub use foresight_core::{anomaly, catalog, confidence, forecaster, insights, models};

// Re-export SPI contracts
pub use foresight_spi::{AnomalyScorer, EngineError, ForecastModel, Result};
