//! Metrics aggregation service.
//!
//! Produces a complete [`AnalyticsResult`] for a dataset by drawing every
//! metric from its contract range. The ranges and the department set live in
//! [`AggregatorConfig`] so a real-data mode can replace the table without
//! touching the aggregation shape.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::domain::{
    AnalyticsResult, Dataset, DepartmentMetrics, Kpis, PatientFlow, ResourcePredictions,
};
use crate::ports::Sampler;

/// Configuration for metrics aggregation.
///
/// Every generated metric's range is data here, with `Default` carrying the
/// dashboard contract.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Departments metrics are generated for, regardless of which
    /// departments appear in the dataset's records
    pub departments: Vec<String>,

    /// Patients attributed to each department
    pub patient_count: Range<u32>,

    /// Average stay per department in days (one-decimal rounding)
    pub stay_duration: Range<f64>,

    /// Per-department resource utilization (two-decimal rounding)
    pub department_utilization: Range<f64>,

    /// Bed occupancy KPI (two-decimal rounding)
    pub bed_occupancy: Range<f64>,

    /// Average wait KPI in minutes (one-decimal rounding)
    pub wait_time: Range<f64>,

    /// Patient satisfaction KPI (one-decimal rounding)
    pub satisfaction: Range<f64>,

    /// Staff utilization KPI (two-decimal rounding)
    pub staff_utilization: Range<f64>,

    /// Daily admissions in the weekly flow series
    pub admissions: Range<u32>,

    /// Daily discharges in the weekly flow series
    pub discharges: Range<u32>,

    /// Daily transfers in the weekly flow series
    pub transfers: Range<u32>,

    /// Waiting-list size
    pub waiting_list: Range<u32>,

    /// Projected staff requirement
    pub staff_projection: Range<u32>,

    /// Projected bed requirement
    pub beds_projection: Range<u32>,

    /// Projected equipment requirement
    pub equipment_projection: Range<u32>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            departments: ["Emergency", "ICU", "Surgery", "General"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            patient_count: 20..70,
            stay_duration: 2.0..7.0,
            department_utilization: 0.5..0.9,
            bed_occupancy: 0.6..0.9,
            wait_time: 15.0..45.0,
            satisfaction: 75.0..95.0,
            staff_utilization: 0.65..0.95,
            admissions: 10..30,
            discharges: 8..23,
            transfers: 2..7,
            waiting_list: 5..20,
            staff_projection: 40..60,
            beds_projection: 25..40,
            equipment_projection: 15..25,
        }
    }
}

/// Service aggregating dataset-level analytics for the dashboard.
///
/// Independent of forecaster training state; every call produces a fresh,
/// fully populated result and cannot fail.
pub struct MetricsAggregator<S: Sampler> {
    sampler: S,
    config: AggregatorConfig,
}

impl<S: Sampler> MetricsAggregator<S> {
    /// Create an aggregator with the contract configuration.
    #[must_use]
    pub fn new(sampler: S) -> Self {
        Self::with_config(sampler, AggregatorConfig::default())
    }

    /// Create an aggregator with a custom configuration.
    #[must_use]
    pub fn with_config(sampler: S, config: AggregatorConfig) -> Self {
        Self { sampler, config }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Produce the complete analytics result for a dataset.
    pub fn analyze(&mut self, dataset: &Dataset) -> AnalyticsResult {
        let cfg = self.config.clone();

        let mut department_metrics = BTreeMap::new();
        for department in &cfg.departments {
            department_metrics.insert(
                department.clone(),
                DepartmentMetrics {
                    patient_count: self
                        .sampler
                        .int_in(cfg.patient_count.start, cfg.patient_count.end),
                    avg_stay_duration: round1(
                        self.sampler
                            .float_in(cfg.stay_duration.start, cfg.stay_duration.end),
                    ),
                    resource_utilization: round2(self.sampler.float_in(
                        cfg.department_utilization.start,
                        cfg.department_utilization.end,
                    )),
                },
            );
        }

        let kpis = Kpis {
            bed_occupancy_rate: round2(
                self.sampler
                    .float_in(cfg.bed_occupancy.start, cfg.bed_occupancy.end),
            ),
            average_wait_time: round1(self.sampler.float_in(cfg.wait_time.start, cfg.wait_time.end)),
            patient_satisfaction: round1(
                self.sampler
                    .float_in(cfg.satisfaction.start, cfg.satisfaction.end),
            ),
            staff_utilization: round2(
                self.sampler
                    .float_in(cfg.staff_utilization.start, cfg.staff_utilization.end),
            ),
        };

        let patient_flow = PatientFlow {
            admissions: std::array::from_fn(|_| {
                self.sampler.int_in(cfg.admissions.start, cfg.admissions.end)
            }),
            discharges: std::array::from_fn(|_| {
                self.sampler.int_in(cfg.discharges.start, cfg.discharges.end)
            }),
            transfers: std::array::from_fn(|_| {
                self.sampler.int_in(cfg.transfers.start, cfg.transfers.end)
            }),
            waiting_list: self
                .sampler
                .int_in(cfg.waiting_list.start, cfg.waiting_list.end),
        };

        let resource_predictions = ResourcePredictions {
            staff: self
                .sampler
                .int_in(cfg.staff_projection.start, cfg.staff_projection.end),
            beds: self
                .sampler
                .int_in(cfg.beds_projection.start, cfg.beds_projection.end),
            equipment: self
                .sampler
                .int_in(cfg.equipment_projection.start, cfg.equipment_projection.end),
        };

        tracing::info!(
            dataset = %dataset.name,
            patients = dataset.patients.len(),
            departments = cfg.departments.len(),
            "Aggregated hospital metrics"
        );

        AnalyticsResult {
            kpis,
            department_metrics,
            patient_flow,
            resource_predictions,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
