//! Feed normalization: per-source normalizers and their common contract

pub mod csv;
pub mod errors;
pub mod json;
pub mod record;
pub mod xml;

pub use csv::TaxCsvNormalizer;
pub use errors::NormalizeError;
pub use json::CreditJsonNormalizer;
pub use record::{RawPayload, UniformRecord};
pub use xml::{AccountingDefaults, AccountingXmlNormalizer};

/// Common capability every feed normalizer satisfies.
///
/// The harness drives all sources through this trait alone and never
/// inspects which concrete normalizer it holds. Calls are pure functions
/// of the wrapped provider's payload with no shared mutable state, so an
/// external scheduler may run them in parallel without locking.
pub trait FinanceDataSource: Send + Sync {
    /// Pull one raw payload from the wrapped provider and normalize it.
    fn fetch(&self) -> Result<UniformRecord, NormalizeError>;

    /// Identifier stamped into the `source` field of emitted records.
    fn source_name(&self) -> &str;
}
