//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

mod aggregator;
mod dashboard;
mod forecaster;

pub use aggregator::{AggregatorConfig, MetricsAggregator};
pub use dashboard::{percent_change, AdmissionOutlook, HeadlineMetrics};
pub use forecaster::{AdmissionForecaster, ForecastError, ForecasterState, ResourceProjection};
