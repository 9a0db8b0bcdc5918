//! Domain layer - pure filter logic
//!
//! This layer contains:
//! - Core Bloom filter engine
//! - djb2 hash and probe derivation
//! - Parameter calculations
//! - Configuration with validation
//!
//! RULES:
//! - No I/O operations
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash;
pub mod parameters;

pub use bloom_filter::{Filter, LookupReport};
pub use config::{FilterConfig, DEFAULT_TARGET_FPR};
pub use hash::{djb2, probe_positions};
pub use parameters::{compute_parameters, expected_fpr, FilterParams};
