//! Error types for p-value adjustment.

use thiserror::Error;

/// Contract violations surfaced by the adjustment engine.
///
/// Both variants indicate programmer error at the call site; neither is
/// recoverable by retrying with the same arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    #[error("comparison count {n} is smaller than the {observed} observed p-values")]
    TooFewComparisons { n: usize, observed: usize },

    #[error("unsupported adjustment method: {0}")]
    UnknownMethod(String),
}
