//! Frequency counting over symbol sequences

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from symbol to occurrence count. The sum of counts equals the
/// length of the input the table was built from.
pub type FrequencyTable<S> = HashMap<S, u64>;

/// Tally occurrences of each distinct symbol in the input.
///
/// Empty input yields an empty table; callers that need a tree must reject
/// that case themselves (see [`crate::tree::build_tree`]).
pub fn count_frequencies<S: Eq + Hash + Clone>(input: &[S]) -> FrequencyTable<S> {
    let mut freq = HashMap::new();
    for sym in input {
        *freq.entry(sym.clone()).or_insert(0) += 1;
    }
    freq
}

/// Shannon entropy of the distribution, in bits per symbol.
pub fn shannon_entropy<S>(freq: &FrequencyTable<S>) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let len = total as f64;
    let mut entropy = 0.0;
    for &f in freq.values() {
        if f > 0 {
            let p = f as f64 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}
