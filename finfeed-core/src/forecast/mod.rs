//! Forecasting and modeling over normalized records

use crate::normalize::UniformRecord;
use serde_json::Value;
use tracing::info;

/// Metrics derived from one uniform record.
///
/// A `None` field means the source record did not carry the domain data
/// that computation needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forecast {
    pub source: String,
    pub profit: Option<f64>,
    pub total_tax_owed: Option<f64>,
    pub credit_status: Option<String>,
    pub credit_limit: Option<f64>,
}

/// Consumer that derives simple metrics from uniform records.
///
/// Each computation keys off the presence of its domain fields; a record
/// without them skips that computation rather than erroring.
#[derive(Clone, Debug, Default)]
pub struct ForecastingModule;

impl ForecastingModule {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, record: &UniformRecord) -> Forecast {
        info!(source = %record.source, "processing normalized record");

        let mut forecast = Forecast {
            source: record.source.clone(),
            ..Forecast::default()
        };

        if let (Some(revenue), Some(expenses)) = (record.revenue, record.expenses) {
            let profit = revenue - expenses;
            info!(profit, "estimated profit");
            forecast.profit = Some(profit);
        }

        if let Some(rows) = &record.tax_records {
            // Rows without a parseable tax_owed contribute nothing.
            let total: f64 = rows
                .iter()
                .filter_map(|row| row.get("tax_owed"))
                .filter_map(numeric)
                .sum();
            info!(total_tax = total, "total tax owed");
            forecast.total_tax_owed = Some(total);
        }

        if let Some(credit) = &record.credit {
            let status = credit
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_string);
            let limit = credit.get("limit").and_then(numeric);
            info!(status = ?status, limit = ?limit, "credit standing");
            forecast.credit_status = status;
            forecast.credit_limit = limit;
        }

        forecast
    }
}

/// Numeric view of a JSON value: native numbers and numeric strings both
/// count (delimited feeds deliver their amounts as strings).
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
