//! N-gram frequency tables
//!
//! Counting, file I/O, and the 50/50 merge of two distributions. The tables
//! feed the layout analyzer downstream; everything here is one-pass
//! dictionary counting over plain text.

mod counter;
mod io;

pub use counter::{normalize, GramCounts};
pub use io::{
    gram_path, read_bigrams, read_trigrams, read_unigrams, write_bigrams, write_trigrams,
    write_unigrams, GramKind,
};

use std::collections::BTreeMap;

/// Merge two normalized distributions with equal weight. Keys missing from
/// one side contribute zero, so the result stays normalized if both inputs
/// were.
pub fn combine_dist<K: Ord + Copy>(a: &BTreeMap<K, f64>, b: &BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    let mut out = BTreeMap::new();
    for &k in a.keys().chain(b.keys()) {
        let merged = a.get(&k).copied().unwrap_or(0.0) * 0.5 + b.get(&k).copied().unwrap_or(0.0) * 0.5;
        out.insert(k, merged);
    }
    out
}
