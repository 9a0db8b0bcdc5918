//! Error types for filter construction

use thiserror::Error;

/// Errors that can occur while deriving a configuration or building a filter
///
/// Construction refuses invalid inputs instead of clamping them: silently
/// adjusting the key count or target rate would change the delivered
/// false-positive guarantee behind the caller's back.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("expected key count must be at least 1, got {count}")]
    InvalidKeyCount { count: usize },

    #[error("target false-positive rate must be in (0, 1), got {rate}")]
    InvalidRate { rate: f64 },

    #[error("failed to allocate bit array of {bits} bits")]
    AllocationFailed { bits: usize },
}
