//! Dashboard consumer contract: headline admission metrics.
//!
//! The enclosing dashboard renders "forecasted admissions" as today's
//! prediction plus a day-over-day change. This module owns that derivation
//! so the formula and its zero-denominator guard live next to the services
//! feeding it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Dataset, FLOW_DAYS};
use crate::ports::Sampler;

use super::{AdmissionForecaster, ResourceProjection};

/// Day-over-day percentage change between two admission forecasts.
///
/// `((today - tomorrow) / tomorrow) * 100`, rounded to one decimal. A zero
/// denominator yields `0.0` — unreachable while admission forecasts stay in
/// `[30, 50)`, and pinned by test so any future range change re-verifies it.
#[must_use]
pub fn percent_change(today: u32, tomorrow: u32) -> f64 {
    if tomorrow == 0 {
        return 0.0;
    }
    let change = (f64::from(today) - f64::from(tomorrow)) / f64::from(tomorrow) * 100.0;
    (change * 10.0).round() / 10.0
}

/// Seven-day admission outlook backing the dashboard headline metric.
#[derive(Debug, Clone, Serialize)]
pub struct AdmissionOutlook {
    /// First forecast day
    pub start: NaiveDate,

    /// Predicted admissions for each of the next seven days
    pub daily: [u32; FLOW_DAYS],

    /// Change between the first two days, in percent
    pub change_pct: f64,
}

impl AdmissionOutlook {
    /// Project admissions for seven consecutive days from `start`.
    pub fn project<S: Sampler>(
        forecaster: &mut AdmissionForecaster<S>,
        start: NaiveDate,
    ) -> Self {
        let mut daily = [0u32; FLOW_DAYS];
        for (offset, slot) in daily.iter_mut().enumerate() {
            let date = start + chrono::Duration::days(offset as i64);
            *slot = forecaster.predict_admissions(date);
        }

        Self {
            start,
            daily,
            change_pct: percent_change(daily[0], daily[1]),
        }
    }
}

/// Headline values for the dashboard's stat cards.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlineMetrics {
    /// Seven-day admission outlook; `daily[0]` is the headline value
    pub outlook: AdmissionOutlook,

    /// Forecast average length of stay in days
    pub average_stay: f64,

    /// Projected resource demand
    pub resources: ResourceProjection,
}

impl HeadlineMetrics {
    /// Build the headline metrics for a dataset.
    ///
    /// Validates the dataset, trains the forecaster and derives the stat-card
    /// values — the refresh flow that runs when the user switches datasets.
    ///
    /// # Errors
    /// Returns an error when the dataset fails validation or contains no
    /// patient records to average over.
    pub fn compute<S: Sampler>(
        forecaster: &mut AdmissionForecaster<S>,
        dataset: &Dataset,
        start: NaiveDate,
    ) -> crate::Result<Self> {
        dataset.validate()?;
        forecaster.train(dataset);

        let outlook = AdmissionOutlook::project(forecaster, start);
        let average_stay = forecaster.predict_average_stay(&dataset.patients)?;
        let resources = forecaster.predict_resources(&dataset.resources);

        Ok(Self {
            outlook,
            average_stay,
            resources,
        })
    }
}
