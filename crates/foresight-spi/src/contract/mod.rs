pub mod anomaly_scorer;
pub mod forecast_model;

pub use anomaly_scorer::AnomalyScorer;
pub use forecast_model::ForecastModel;
