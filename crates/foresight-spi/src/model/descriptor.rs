//! Static catalog descriptor types.
//!
//! Descriptors are display metadata, not fitted artifacts; they carry no
//! state between calls. Accuracy labels are static strings shown in the
//! dashboard, never computed metrics.

use serde::Serialize;

/// Catalog entry for a forecasting model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    /// Stable identifier used in the dispatch (e.g. `linear_regression`)
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Static display label, e.g. "~85%"
    pub accuracy_label: &'static str,
}

/// Catalog entry for a dashboard metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricDescriptor {
    /// Stable identifier the caller uses to fetch the series
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Unit shown next to values, e.g. "documents/day"
    pub unit: &'static str,
    /// Model id requested by default for this metric
    pub default_model: &'static str,
    /// Default forecast horizon in days
    pub default_horizon: usize,
}
