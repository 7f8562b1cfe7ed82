//! Hospicast: Hospital operations forecasting and analytics core.
//!
//! Demo entry point: walks the dataset catalog, trains a forecaster per
//! dataset and prints the resulting outlook and analytics as JSON. Chart and
//! dashboard collaborators consume the same structures through the library
//! API.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hospicast::adapters::ChaChaSampler;
use hospicast::application::{AdmissionForecaster, HeadlineMetrics, MetricsAggregator};
use hospicast::domain::Dataset;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hospicast...");

    let today = chrono::Local::now().date_naive();

    for dataset in Dataset::catalog() {
        let mut forecaster = AdmissionForecaster::new(ChaChaSampler::new());
        let headline = HeadlineMetrics::compute(&mut forecaster, &dataset, today)?;

        let mut aggregator = MetricsAggregator::new(ChaChaSampler::new());
        let analytics = aggregator.analyze(&dataset);

        println!("=== {} ===", dataset.name);
        println!(
            "Forecasted admissions: {} ({:+.1}% day-over-day)",
            headline.outlook.daily[0], headline.outlook.change_pct
        );
        println!("Average stay forecast: {} days", headline.average_stay);
        println!("Headline metrics: {}", serde_json::to_string(&headline)?);
        println!("{}", serde_json::to_string_pretty(&analytics)?);
    }

    tracing::info!("hospicast complete.");
    Ok(())
}
