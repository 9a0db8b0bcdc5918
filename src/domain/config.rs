//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloomcheck::FilterConfig;
//!
//! let config = FilterConfig::new(3, 0.01).expect("valid config");
//! assert_eq!(config.bit_count(), 29);
//! assert_eq!(config.probe_count(), 7);
//! ```

use crate::error::FilterError;

use super::parameters::compute_parameters;

/// Default target false-positive rate when the caller does not choose one.
pub const DEFAULT_TARGET_FPR: f64 = 0.01;

/// Immutable filter configuration
///
/// `bit_count` and `probe_count` are derived deterministically and
/// exclusively from `expected_keys` and `target_fpr` at construction
/// time; the fields are private so they cannot drift afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    expected_keys: usize,
    target_fpr: f64,
    bit_count: usize,
    probe_count: usize,
    expected_fpr: f64,
}

impl FilterConfig {
    /// Create a configuration, validating inputs and deriving (m, k)
    ///
    /// # Errors
    /// * [`FilterError::InvalidKeyCount`] if `expected_keys` is 0
    /// * [`FilterError::InvalidRate`] if `target_fpr` is not in (0, 1)
    ///
    /// Out-of-range values are refused, never clamped.
    pub fn new(expected_keys: usize, target_fpr: f64) -> Result<Self, FilterError> {
        if expected_keys < 1 {
            return Err(FilterError::InvalidKeyCount {
                count: expected_keys,
            });
        }
        // The comparison also rejects NaN
        if !(target_fpr > 0.0 && target_fpr < 1.0) {
            return Err(FilterError::InvalidRate { rate: target_fpr });
        }

        let params = compute_parameters(expected_keys, target_fpr);
        Ok(Self {
            expected_keys,
            target_fpr,
            bit_count: params.bit_count,
            probe_count: params.probe_count,
            expected_fpr: params.expected_fpr,
        })
    }

    /// Create a configuration with the default 1% target rate
    pub fn with_default_rate(expected_keys: usize) -> Result<Self, FilterError> {
        Self::new(expected_keys, DEFAULT_TARGET_FPR)
    }

    /// Number of keys the filter is sized for (n)
    pub fn expected_keys(&self) -> usize {
        self.expected_keys
    }

    /// Target false-positive rate requested at construction (p)
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Derived bit-array size (m)
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Derived probe count per key (k)
    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    /// Rate actually achieved by the derived (m, k), for diagnostics
    pub fn expected_fpr(&self) -> f64 {
        self.expected_fpr
    }
}
