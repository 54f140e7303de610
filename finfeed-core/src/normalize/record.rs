//! Raw payload and uniform record types shared by all normalizers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw data as produced by a source provider, in its native shape.
///
/// Owned transiently by the normalization call that consumes it; never
/// retained afterwards.
#[derive(Clone, Debug)]
pub enum RawPayload {
    /// Header line plus comma-separated data rows
    Delimited(String),
    /// Scalar fields wrapped in `<name>...</name>` marker pairs
    Markup(String),
    /// Already-structured key/value mapping
    Structured(Map<String, Value>),
}

impl RawPayload {
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Delimited(_) => "delimited text",
            Self::Markup(_) => "markup text",
            Self::Structured(_) => "structured mapping",
        }
    }
}

/// Normalized, source-tagged record consumed by downstream forecasting.
///
/// Which domain fields are present determines which computations the
/// consumer may attempt; an absent field means "not applicable", never an
/// error. Absent fields are skipped on serialization so the wire form
/// carries exactly the keys the source contributed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformRecord {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_records: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Map<String, Value>>,
}

impl UniformRecord {
    fn tagged(source: &str) -> Self {
        Self {
            source: source.to_string(),
            tax_records: None,
            revenue: None,
            expenses: None,
            credit: None,
        }
    }

    pub fn from_tax_rows(source: &str, rows: Vec<Map<String, Value>>) -> Self {
        Self {
            tax_records: Some(rows),
            ..Self::tagged(source)
        }
    }

    pub fn from_accounting(source: &str, revenue: f64, expenses: f64) -> Self {
        Self {
            revenue: Some(revenue),
            expenses: Some(expenses),
            ..Self::tagged(source)
        }
    }

    pub fn from_credit(source: &str, mapping: Map<String, Value>) -> Self {
        Self {
            credit: Some(mapping),
            ..Self::tagged(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_skipped_on_serialization() {
        let mut mapping = Map::new();
        mapping.insert("status".to_string(), Value::from("approved"));

        let record = UniformRecord::from_credit("CreditAuthorizationJSONService", mapping);
        let wire = serde_json::to_value(&record).unwrap();

        assert_eq!(
            wire,
            json!({
                "source": "CreditAuthorizationJSONService",
                "credit": {"status": "approved"},
            })
        );
    }

    #[test]
    fn test_accounting_record_carries_both_scalars() {
        let record = UniformRecord::from_accounting("AccountingXMLModule", 100000.0, 60000.0);
        assert_eq!(record.revenue, Some(100000.0));
        assert_eq!(record.expenses, Some(60000.0));
        assert!(record.tax_records.is_none());
        assert!(record.credit.is_none());
    }
}
