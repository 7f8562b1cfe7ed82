//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod dataset;
mod metrics;
mod patient;

pub use dataset::{Dataset, DatasetError, ResourceInventory, ResourceLevel};
pub use metrics::{
    AnalyticsResult, DepartmentMetrics, Kpis, PatientFlow, ResourcePredictions, FLOW_DAYS,
};
pub use patient::{Outcome, PatientRecord, Severity};
