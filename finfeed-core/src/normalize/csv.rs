//! Delimited-text normalizer for the tax calculator feed

use super::{FinanceDataSource, NormalizeError, RawPayload, UniformRecord};
use crate::sources::TaxCalculatorCsv;
use serde_json::{Map, Value};

/// Normalizer for comma-separated tax reports
pub struct TaxCsvNormalizer {
    provider: TaxCalculatorCsv,
}

impl TaxCsvNormalizer {
    pub const SOURCE: &'static str = "TaxCalculatorCSV";

    pub fn new(provider: TaxCalculatorCsv) -> Self {
        Self { provider }
    }

    /// Normalize one delimited-text payload into an ordered tax record set.
    pub fn normalize(&self, raw: RawPayload) -> Result<UniformRecord, NormalizeError> {
        let text = match raw {
            RawPayload::Delimited(text) => text,
            other => {
                return Err(NormalizeError::UnsupportedPayload {
                    expected: "delimited text",
                    got: other.shape_name(),
                })
            }
        };
        Ok(UniformRecord::from_tax_rows(Self::SOURCE, parse_rows(&text)))
    }
}

impl FinanceDataSource for TaxCsvNormalizer {
    fn fetch(&self) -> Result<UniformRecord, NormalizeError> {
        self.normalize(RawPayload::Delimited(self.provider.tax_data_csv()))
    }

    fn source_name(&self) -> &str {
        Self::SOURCE
    }
}

/// Zip each non-empty data line positionally against the header line.
///
/// Ragged rows keep the positional semantics: the shorter of header and
/// row wins, so trailing extra values are dropped and missing fields stay
/// absent. No data rows means no records, not an error.
fn parse_rows(text: &str) -> Vec<Map<String, Value>> {
    let mut lines = text.lines().filter(|line| !line.is_empty());
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let header: Vec<&str> = header_line.split(',').collect();

    lines
        .map(|line| {
            header
                .iter()
                .zip(line.split(','))
                .map(|(field, value)| (field.to_string(), Value::from(value)))
                .collect()
        })
        .collect()
}
