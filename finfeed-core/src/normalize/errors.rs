//! Normalization error types

use thiserror::Error;

/// Hard failures a normalization call can surface.
///
/// Soft conditions (ragged rows, missing marker pairs, absent mapping
/// keys) degrade to defined fallbacks inside the normalizers and never
/// appear here.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("field '{field}' is not numeric: '{value}'")]
    MalformedNumericField {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("expected {expected} payload, got {got}")]
    UnsupportedPayload {
        expected: &'static str,
        got: &'static str,
    },
}
