//! Static model and metric catalogs
//!
//! Read-only display metadata the dashboard uses to decide which series
//! to fetch and which model to request. Accuracy labels are fixed
//! strings, not computed metrics.

use foresight_spi::{MetricDescriptor, ModelDescriptor};

static MODELS: [ModelDescriptor; 5] = [
    ModelDescriptor {
        id: "linear_regression",
        display_name: "Linear Trend",
        description: "Ordinary least-squares trend line; the default model",
        accuracy_label: "~85%",
    },
    ModelDescriptor {
        id: "exponential_smoothing",
        display_name: "Exponential Smoothing",
        description: "Recency-weighted smoothing that reacts quickly to change",
        accuracy_label: "~88%",
    },
    ModelDescriptor {
        id: "moving_average",
        display_name: "Moving Average",
        description: "7-day trailing mean producing a flat outlook",
        accuracy_label: "~82%",
    },
    ModelDescriptor {
        id: "seasonal",
        display_name: "Weekly Seasonal",
        description: "Linear trend scaled by day-of-week usage patterns",
        accuracy_label: "~90%",
    },
    ModelDescriptor {
        id: "polynomial",
        display_name: "Quadratic Trend",
        description: "Degree-2 curve for accelerating or flattening usage",
        accuracy_label: "~87%",
    },
];

static METRICS: [MetricDescriptor; 4] = [
    MetricDescriptor {
        id: "document_uploads",
        display_name: "Document Uploads",
        description: "Documents uploaded per day across all workspaces",
        unit: "documents/day",
        default_model: "seasonal",
        default_horizon: 7,
    },
    MetricDescriptor {
        id: "active_users",
        display_name: "Active Users",
        description: "Distinct users with at least one session per day",
        unit: "users/day",
        default_model: "exponential_smoothing",
        default_horizon: 7,
    },
    MetricDescriptor {
        id: "ai_usage",
        display_name: "AI Feature Usage",
        description: "AI-assisted operations invoked per day",
        unit: "requests/day",
        default_model: "linear_regression",
        default_horizon: 7,
    },
    MetricDescriptor {
        id: "workflow_submissions",
        display_name: "Workflow Submissions",
        description: "Review workflows entered per day",
        unit: "submissions/day",
        default_model: "moving_average",
        default_horizon: 7,
    },
];

/// The forecasting models the engine advertises.
pub fn model_catalog() -> &'static [ModelDescriptor] {
    &MODELS
}

/// The dashboard metrics the engine is asked to analyze.
pub fn metric_catalog() -> &'static [MetricDescriptor] {
    &METRICS
}

/// Look up a model descriptor by id.
pub fn find_model(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|m| m.id == id)
}

/// Look up a metric descriptor by id.
pub fn find_metric(id: &str) -> Option<&'static MetricDescriptor> {
    METRICS.iter().find(|m| m.id == id)
}
