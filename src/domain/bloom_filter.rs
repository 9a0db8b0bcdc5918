//! Core Bloom filter engine
//!
//! INVARIANTS:
//! - No false negatives: if a key was inserted, `query` MUST return true
//! - Bits only transition unset -> set; nothing clears a bit after build

use std::sync::atomic::{AtomicU64, Ordering};

use bitvec::prelude::*;

use crate::error::FilterError;

use super::config::FilterConfig;
use super::hash::probe_positions;

/// Bloom filter for probabilistic membership testing
///
/// Built once from a fixed key set, then queried read-only. False
/// positives are possible; false negatives are not. Lookup counters are
/// relaxed atomics so a completed filter can be queried from `&self`,
/// including concurrently.
#[derive(Debug)]
pub struct Filter {
    config: FilterConfig,
    bits: BitVec<u8, Lsb0>,
    /// Number of keys inserted during build
    keys_inserted: usize,
    /// Diagnostic counters, not correctness-affecting state
    lookups: AtomicU64,
    matches: AtomicU64,
}

/// Result of a batch of lookups: `matches` of `lookups` keys were
/// (probably) present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LookupReport {
    pub matches: u64,
    pub lookups: u64,
}

impl Filter {
    /// Build a filter from a key sequence
    ///
    /// Allocates a zero-filled bit array of `config.bit_count()` bits and
    /// inserts every key. Insertion order does not affect the final bit
    /// array.
    ///
    /// # Errors
    /// [`FilterError::AllocationFailed`] if storage for the bit array
    /// cannot be reserved. A failed build leaves no usable filter.
    pub fn build<I, S>(config: FilterConfig, keys: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::with_config(config)?;
        for key in keys {
            filter.insert(key.as_ref());
        }
        Ok(filter)
    }

    /// Allocate an empty filter for the given configuration
    fn with_config(config: FilterConfig) -> Result<Self, FilterError> {
        let bit_count = config.bit_count();
        let byte_count = bit_count.div_ceil(8);

        let mut storage: Vec<u8> = Vec::new();
        storage
            .try_reserve_exact(byte_count)
            .map_err(|_| FilterError::AllocationFailed { bits: bit_count })?;
        storage.resize(byte_count, 0);

        let mut bits = BitVec::<u8, Lsb0>::from_vec(storage);
        bits.truncate(bit_count);

        Ok(Self {
            config,
            bits,
            keys_inserted: 0,
            lookups: AtomicU64::new(0),
            matches: AtomicU64::new(0),
        })
    }

    /// Insert a key
    ///
    /// Sets the key's probe positions. Re-inserting a key is idempotent
    /// with respect to the bit array. After insertion, `query(key)` is
    /// guaranteed to return true.
    pub fn insert(&mut self, key: &str) {
        let positions = probe_positions(key, self.config.probe_count(), self.config.bit_count());
        for pos in positions {
            self.bits.set(pos, true);
        }
        self.keys_inserted += 1;
    }

    /// Test whether a key is probably in the set
    ///
    /// Returns:
    /// - `true` if the key might be in the set (could be a false positive)
    /// - `false` if the key is definitely NOT in the set
    ///
    /// Read-only on the bit array; bumps the diagnostic counters.
    pub fn query(&self, key: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let positions = probe_positions(key, self.config.probe_count(), self.config.bit_count());
        let hit = positions.into_iter().all(|pos| self.bits[pos]);
        if hit {
            self.matches.fetch_add(1, Ordering::Relaxed);
        }
        hit
    }

    /// Query a batch of keys, returning how many matched
    pub fn query_all<I, S>(&self, keys: I) -> LookupReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = LookupReport::default();
        for key in keys {
            report.lookups += 1;
            if self.query(key.as_ref()) {
                report.matches += 1;
            }
        }
        report
    }

    /// Snapshot of the lifetime lookup counters
    pub fn report(&self) -> LookupReport {
        LookupReport {
            matches: self.matches.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
        }
    }

    /// Configuration the filter was built with
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Number of keys inserted during build
    pub fn keys_inserted(&self) -> usize {
        self.keys_inserted
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}
