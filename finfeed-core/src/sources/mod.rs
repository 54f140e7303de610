//! External source modules the normalizers wrap
//!
//! These stand in for third-party systems we cannot modify. Each emits
//! data in its own native shape through its own method and knows nothing
//! about [`UniformRecord`](crate::normalize::UniformRecord). Read-only,
//! stateless per call.

use serde_json::{Map, Value};

/// Tax calculator that reports as comma-separated text
#[derive(Clone, Debug, Default)]
pub struct TaxCalculatorCsv;

impl TaxCalculatorCsv {
    /// Example CSV: header line, then one row per tax period.
    pub fn tax_data_csv(&self) -> String {
        "year,tax_owed\n2024,12000\n2025,9000\n".to_string()
    }
}

/// Accounting system that reports as markup-like text
#[derive(Clone, Debug, Default)]
pub struct AccountingXmlModule;

impl AccountingXmlModule {
    pub fn accounting_xml(&self) -> String {
        "<accounting><revenue>100000</revenue><expenses>60000</expenses></accounting>".to_string()
    }
}

/// Credit authorization service that reports structured records
#[derive(Clone, Debug, Default)]
pub struct CreditAuthorizationJsonService;

impl CreditAuthorizationJsonService {
    pub fn credit_json(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert("credit_score".to_string(), Value::from(720));
        mapping.insert("limit".to_string(), Value::from(15000));
        mapping.insert("status".to_string(), Value::from("approved"));
        mapping
    }
}
