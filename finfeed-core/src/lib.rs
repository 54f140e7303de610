//! Finance Feed Normalization Library
//!
//! Normalizes heterogeneous financial data feeds (delimited text, markup
//! text, structured key/value records) into one uniform record shape that
//! downstream forecasting can consume without per-source branching.

pub mod forecast;
pub mod normalize;
pub mod sources;

// Re-export main types for easy access
pub use forecast::{Forecast, ForecastingModule};
pub use normalize::{
    AccountingDefaults, AccountingXmlNormalizer, CreditJsonNormalizer, FinanceDataSource,
    NormalizeError, RawPayload, TaxCsvNormalizer, UniformRecord,
};
pub use sources::{AccountingXmlModule, CreditAuthorizationJsonService, TaxCalculatorCsv};

/// Build the standard demo feed set behind the common contract.
///
/// Callers drive every entry through [`FinanceDataSource`] alone; the
/// concrete normalizer behind each box is not observable.
pub fn standard_sources() -> Vec<Box<dyn FinanceDataSource>> {
    vec![
        Box::new(TaxCsvNormalizer::new(TaxCalculatorCsv::default())),
        Box::new(AccountingXmlNormalizer::new(AccountingXmlModule::default())),
        Box::new(CreditJsonNormalizer::new(CreditAuthorizationJsonService::default())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_sources_normalize_uniformly() {
        let forecasting = ForecastingModule::new();

        // The loop body is the whole consumer contract: no branching on
        // which feed produced the record.
        let forecasts: Vec<Forecast> = standard_sources()
            .iter()
            .map(|source| forecasting.process(&source.fetch().unwrap()))
            .collect();

        assert_eq!(forecasts.len(), 3);
        assert_eq!(forecasts[0].total_tax_owed, Some(21000.0));
        assert_eq!(forecasts[1].profit, Some(40000.0));
        assert_eq!(forecasts[2].credit_status.as_deref(), Some("approved"));
        assert_eq!(forecasts[2].credit_limit, Some(15000.0));
    }

    #[test]
    fn test_every_record_is_source_tagged() {
        for source in standard_sources() {
            let record = source.fetch().unwrap();
            assert_eq!(record.source, source.source_name());
        }
    }
}
