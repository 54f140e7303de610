//! Finance Feed Demo Application
//!
//! Pulls one record from each heterogeneous source through the common
//! normalization contract and runs the forecasting module over the
//! uniform output.

use anyhow::Result;
use tracing::{error, info};

use finfeed_core::{standard_sources, ForecastingModule};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    info!("🚀 Starting finance feed normalization demo");

    let forecasting = ForecastingModule::new();

    for source in standard_sources() {
        match source.fetch() {
            Ok(record) => {
                let forecast = forecasting.process(&record);
                info!(
                    "📊 {} -> profit: {:?}, total tax: {:?}, credit: {:?}/{:?}",
                    forecast.source,
                    forecast.profit,
                    forecast.total_tax_owed,
                    forecast.credit_status,
                    forecast.credit_limit
                );
            }
            Err(e) => {
                // One bad feed must not take down the others.
                error!("Failed to normalize {}: {}", source.source_name(), e);
            }
        }
    }

    info!("✅ Finance feed demo complete");
    Ok(())
}
