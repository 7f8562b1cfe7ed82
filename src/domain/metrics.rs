//! Analytics result types consumed by dashboard charts.
//!
//! The camelCase wire names are part of the consumer contract: chart
//! collaborators key on `departmentMetrics`, `patientFlow` and the KPI
//! field names exactly as serialized here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of days in each patient-flow series.
pub const FLOW_DAYS: usize = 7;

/// Point-in-time key performance indicators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    /// Fraction of beds occupied, within [0.6, 0.9]
    pub bed_occupancy_rate: f64,

    /// Average wait in minutes, within [15, 45]
    pub average_wait_time: f64,

    /// Satisfaction score, within [75, 95]
    pub patient_satisfaction: f64,

    /// Fraction of staff engaged, within [0.65, 0.95]
    pub staff_utilization: f64,
}

/// Metrics generated for one department.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMetrics {
    /// Patients currently attributed to the department
    pub patient_count: u32,

    /// Average stay in days, one-decimal precision
    pub avg_stay_duration: f64,

    /// Fraction of department resources in use, within [0.5, 0.9]
    pub resource_utilization: f64,
}

/// Seven-day admission, discharge and transfer series plus the waiting list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFlow {
    /// Daily admissions over the forecast week
    pub admissions: [u32; FLOW_DAYS],

    /// Daily discharges over the forecast week
    pub discharges: [u32; FLOW_DAYS],

    /// Daily transfers over the forecast week
    pub transfers: [u32; FLOW_DAYS],

    /// Patients currently waiting for a bed
    pub waiting_list: u32,
}

/// Short-term staffing, bed and equipment projections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePredictions {
    /// Projected staff requirement
    pub staff: u32,

    /// Projected bed requirement
    pub beds: u32,

    /// Projected equipment requirement
    pub equipment: u32,
}

/// Complete analytics output for one dataset.
///
/// Produced fresh on every analysis call and owned by the caller; nothing
/// here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    /// Headline KPIs
    pub kpis: Kpis,

    /// Metrics keyed by department name, in stable order
    pub department_metrics: BTreeMap<String, DepartmentMetrics>,

    /// Weekly flow series
    pub patient_flow: PatientFlow,

    /// Resource projections
    pub resource_predictions: ResourcePredictions,
}
