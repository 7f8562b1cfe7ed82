//! # Hospicast
//!
//! Hospital operations forecasting and analytics core.
//!
//! This crate provides:
//! - Admission forecasting over named hospital datasets
//! - Point-in-time KPI and per-department metric aggregation
//! - Short-term resource projections for dashboard consumers
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (Patient, Dataset, AnalyticsResult)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (ChaCha-backed sampling)
//! - `application`: Use cases orchestrating domain and ports
//!
//! The forecasting computation is bounded-random generation standing in for a
//! trained model, so every service draws its randomness through the
//! [`ports::Sampler`] port and can be pinned to a deterministic sequence.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::{AdmissionForecaster, AdmissionOutlook, HeadlineMetrics, MetricsAggregator};
pub use domain::{AnalyticsResult, Dataset, PatientRecord};

/// Result type for Hospicast operations
pub type Result<T> = std::result::Result<T, HospicastError>;

/// Main error type for Hospicast
#[derive(Debug, thiserror::Error)]
pub enum HospicastError {
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] domain::DatasetError),

    #[error("Forecast failed: {0}")]
    Forecast(#[from] application::ForecastError),
}
