//! Structured-record normalizer for the credit authorization feed

use super::{FinanceDataSource, NormalizeError, RawPayload, UniformRecord};
use crate::sources::CreditAuthorizationJsonService;

/// Normalizer for already-structured credit records
pub struct CreditJsonNormalizer {
    provider: CreditAuthorizationJsonService,
}

impl CreditJsonNormalizer {
    pub const SOURCE: &'static str = "CreditAuthorizationJSONService";

    pub fn new(provider: CreditAuthorizationJsonService) -> Self {
        Self { provider }
    }

    /// Wrap the structured mapping unchanged under the `credit` key.
    ///
    /// No key validation happens here; an absent key surfaces only when
    /// the consumer later looks it up.
    pub fn normalize(&self, raw: RawPayload) -> Result<UniformRecord, NormalizeError> {
        let mapping = match raw {
            RawPayload::Structured(mapping) => mapping,
            other => {
                return Err(NormalizeError::UnsupportedPayload {
                    expected: "structured mapping",
                    got: other.shape_name(),
                })
            }
        };
        Ok(UniformRecord::from_credit(Self::SOURCE, mapping))
    }
}

impl FinanceDataSource for CreditJsonNormalizer {
    fn fetch(&self) -> Result<UniformRecord, NormalizeError> {
        self.normalize(RawPayload::Structured(self.provider.credit_json()))
    }

    fn source_name(&self) -> &str {
        Self::SOURCE
    }
}
