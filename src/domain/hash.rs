//! djb2 hash and probe-position derivation
//!
//! One base hash per key; the k probe positions are derived from it by
//! multiplication ("less hashing, same performance" style) instead of
//! computing k independently seeded hashes.

/// Seed constant of the djb2 scheme.
const DJB2_SEED: u32 = 5381;

/// Hash a key with djb2
///
/// Folds each byte via `hash = hash * 33 + byte`, accumulated in a 32-bit
/// unsigned integer with silent wraparound. Deterministic within and
/// across processes: no per-run seed. Not collision-resistant against
/// adversarial input; fine for ordinary dictionary words.
///
/// The 32-bit width is load-bearing for probe derivation. What matters
/// is the final hash magnitude relative to `2^32 / k`: the multiply in
/// [`probe_positions`] only wraps when `hash * k` exceeds 2^32, and only
/// then are keys sharing a residue mod the bit-array size separated. A
/// 64-bit accumulator would leave every ordinary word far below that
/// threshold and collapse all probes to a function of `hash % bit_count`.
/// Five-letter lowercase keys are the residual worst case even at 32
/// bits: their hashes all land in a narrow band around 2.7e8, below
/// `2^32 / 7`, so their probes stay tied to that residue and the
/// achieved false-positive rate degrades toward
/// `inserted_keys / bit_count` for them.
pub fn djb2(key: &str) -> u32 {
    key.bytes().fold(DJB2_SEED, |hash, byte| {
        hash.wrapping_mul(33).wrapping_add(u32::from(byte))
    })
}

/// Compute k probe positions for a key
///
/// Position i is `(djb2(key) * (i+1)) mod bit_count`, with the multiply
/// wrapping at 32 bits.
pub fn probe_positions(key: &str, probe_count: usize, bit_count: usize) -> Vec<usize> {
    let base = djb2(key);
    (0..probe_count as u32)
        .map(|i| base.wrapping_mul(i + 1) as usize % bit_count)
        .collect()
}
