pub mod anomaly;
pub mod confidence_band;
pub mod descriptor;
pub mod fit;
pub mod insight;

pub use anomaly::{Anomaly, AnomalyKind, AnomalySeverity};
pub use confidence_band::ConfidenceBand;
pub use descriptor::{MetricDescriptor, ModelDescriptor};
pub use fit::{PolyFit, TrendLine};
pub use insight::{Insight, InsightKind};
