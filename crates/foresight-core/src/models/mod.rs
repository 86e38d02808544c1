//! Forecasting model implementations
//!
//! One module per model, each exposing the underlying numerical routine as
//! a free function next to a stateful [`ForecastModel`] implementation:
//!
//! - [`linear_regression`]: ordinary least-squares trend line
//! - [`exponential_smoothing`]: exponentially weighted recency smoothing
//! - [`moving_average`]: fixed-window trailing mean
//! - [`seasonal`]: weekly-phase decomposition combined with a trend
//! - [`polynomial`]: quadratic fit with linear fallback

pub mod exponential_smoothing;
pub mod linear_regression;
pub mod moving_average;
pub mod polynomial;
pub mod seasonal;

pub use exponential_smoothing::{exponential_smooth, ExponentialSmoothing};
pub use linear_regression::{fit_trend, LinearRegression};
pub use moving_average::{moving_average_smooth, MovingAverage};
pub use polynomial::{fit_polynomial, PolynomialModel};
pub use seasonal::{seasonal_averages, SeasonalModel};

pub use foresight_spi::ForecastModel;
