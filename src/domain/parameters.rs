//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)         -- optimal probe count
//! - FPR = (1 - e^(-kn/m))^k   -- achieved rate for chosen (m, n, k)

use std::f64::consts::LN_2;

/// Derived Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub bit_count: usize,
    /// Number of probe positions per key (k)
    pub probe_count: usize,
    /// False positive rate achieved with these parameters
    pub expected_fpr: f64,
}

/// Calculate optimal filter parameters for the given constraints
///
/// # Arguments
/// * `expected_keys` - Number of keys that will be inserted (n)
/// * `target_fpr` - Target false positive rate (p)
///
/// # Returns
/// Parameters (m, k) sized for the target rate, using the natural-log
/// closed form. `probe_count` is rounded to the nearest integer and
/// clamped to at least 1; no search is made for the integer k that
/// minimizes the actual rate, so the achieved rate only approximates
/// `target_fpr`, more so for small `expected_keys`.
///
/// Preconditions (`expected_keys >= 1`, `0 < target_fpr < 1`) are the
/// caller's responsibility; [`FilterConfig::new`] validates them on the
/// release path, so they are only asserted in debug builds here.
///
/// [`FilterConfig::new`]: super::config::FilterConfig::new
pub fn compute_parameters(expected_keys: usize, target_fpr: f64) -> FilterParams {
    debug_assert!(expected_keys >= 1, "expected_keys must be at least 1");
    debug_assert!(
        target_fpr > 0.0 && target_fpr < 1.0,
        "target_fpr must be in (0, 1)"
    );

    let n = expected_keys as f64;
    let ln2_squared = LN_2 * LN_2;

    // Optimal number of bits: m = -n * ln(p) / (ln(2)^2)
    let m = (-n * target_fpr.ln() / ln2_squared).ceil() as usize;

    // Optimal probe count: k = (m/n) * ln(2), never below 1
    let k = (((m as f64 / n) * LN_2).round() as usize).max(1);

    FilterParams {
        bit_count: m,
        probe_count: k,
        expected_fpr: expected_fpr(m, expected_keys, k),
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn expected_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_n3_fpr001() {
        // ceil(-3*ln(0.01)/ln(2)^2) = ceil(28.76) = 29, round((29/3)*ln2) = 7
        let params = compute_parameters(3, 0.01);

        assert_eq!(params.bit_count, 29, "Expected m=29, got m={}", params.bit_count);
        assert_eq!(params.probe_count, 7, "Expected k=7, got k={}", params.probe_count);
    }

    #[test]
    fn test_parameters_n100_fpr001() {
        // For n=100, p=0.01 -> expect k~7, m~959
        let params = compute_parameters(100, 0.01);

        assert!(
            params.probe_count >= 5 && params.probe_count <= 9,
            "Expected k~7, got k={}",
            params.probe_count
        );
        assert!(
            params.bit_count >= 800 && params.bit_count <= 1200,
            "Expected m~959, got m={}",
            params.bit_count
        );
    }

    #[test]
    fn test_probe_count_never_below_one() {
        // A very loose target would otherwise round k down to 0
        let params = compute_parameters(1000, 0.9);
        assert!(params.probe_count >= 1, "k should be clamped to at least 1");
    }

    #[test]
    fn test_expected_fpr_calculation() {
        // With m=1000, n=100, k=7, rate should be around 0.008
        let fpr = expected_fpr(1000, 100, 7);
        assert!(fpr > 0.005 && fpr < 0.02, "Expected FPR~0.008, got {}", fpr);
    }

    #[test]
    fn test_expected_fpr_near_target() {
        let target = 0.01;
        let params = compute_parameters(100, target);

        assert!(
            params.expected_fpr <= target * 1.1,
            "Achieved rate {} should be close to target {}",
            params.expected_fpr,
            target
        );
    }

    #[test]
    fn test_larger_n_needs_more_bits() {
        let params1 = compute_parameters(100, 0.01);
        let params2 = compute_parameters(1000, 0.01);

        assert!(
            params2.bit_count > params1.bit_count,
            "More keys should need more bits"
        );
    }

    #[test]
    fn test_lower_fpr_needs_more_bits() {
        let params1 = compute_parameters(100, 0.1);
        let params2 = compute_parameters(100, 0.01);

        assert!(
            params2.bit_count > params1.bit_count,
            "Lower target rate should need more bits"
        );
    }

    #[test]
    fn test_deterministic() {
        let params1 = compute_parameters(512, 0.02);
        let params2 = compute_parameters(512, 0.02);
        assert_eq!(params1, params2, "Same inputs must derive same parameters");
    }
}
