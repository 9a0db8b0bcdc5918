//! # bloomcheck
//!
//! Probabilistic set-membership over textual keys: build a Bloom filter
//! from a reference collection once, then ask "is this key probably in
//! the collection?" in sub-linear memory. False positives occur at a
//! configurable bounded rate; false negatives never do.
//!
//! ## Architecture
//!
//! - **Domain layer** (`domain/`): pure logic, no I/O
//!   - `parameters`: optimal (m, k) derivation from key count and target rate
//!   - `hash`: djb2 base hash plus multiplicative probe derivation
//!   - `bloom_filter`: bit-array engine with build/insert/query
//!   - `config`: validated, immutable [`FilterConfig`]
//! - **Keys layer** (`keys`): whitespace tokenization of key sources
//! - **CLI** (`main.rs`): two-file dictionary/lookup front end
//!
//! ## Invariants
//!
//! - No false negatives: every key passed to [`Filter::build`] queries true
//! - The bit array is monotone during build and constant during queries
//! - `bit_count` and `probe_count` derive only from `expected_keys` and
//!   `target_fpr`, and never change after construction
//!
//! ## Usage
//!
//! ```
//! use bloomcheck::{Filter, FilterConfig};
//!
//! let keys = ["cat", "dog", "bird"];
//! let config = FilterConfig::new(keys.len(), 0.01)?;
//! let filter = Filter::build(config, keys)?;
//!
//! assert!(filter.query("cat"));
//! let report = filter.query_all(["dog", "zzz9"]);
//! assert_eq!(report.lookups, 2);
//! # Ok::<(), bloomcheck::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod keys;

pub use domain::{
    compute_parameters, djb2, expected_fpr, probe_positions, Filter, FilterConfig, FilterParams,
    LookupReport, DEFAULT_TARGET_FPR,
};
pub use error::FilterError;
