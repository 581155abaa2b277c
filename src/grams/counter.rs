//! One-pass n-gram counting over corpus text

use std::collections::BTreeMap;

/// Unigram/bigram/trigram counts over consecutive allowed characters.
/// BTreeMaps keep keys sorted, which is the order the data files use.
#[derive(Debug, Default)]
pub struct GramCounts {
    pub unigrams: BTreeMap<char, u64>,
    pub bigrams: BTreeMap<(char, char), u64>,
    pub trigrams: BTreeMap<(char, char, char), u64>,
}

/// Lowercase the text and fold shifted home-layer punctuation back onto its
/// unshifted key (`:<>?` type through the same keys as `;,./`).
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            ':' => ';',
            '<' => ',',
            '>' => '.',
            '?' => '/',
            other => other,
        })
        .collect()
}

impl GramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count n-grams in one corpus file. A character outside `allowed`
    /// breaks the bigram/trigram chain; chains never span files.
    pub fn feed(&mut self, text: &str, allowed: &str) {
        let mut prev: Option<char> = None;
        let mut pprev: Option<char> = None;
        for c in text.chars() {
            if !allowed.contains(c) {
                prev = None;
                pprev = None;
                continue;
            }

            *self.unigrams.entry(c).or_insert(0) += 1;

            if let Some(p) = prev {
                *self.bigrams.entry((p, c)).or_insert(0) += 1;
                if let Some(pp) = pprev {
                    *self.trigrams.entry((pp, p, c)).or_insert(0) += 1;
                }
            }
            pprev = prev;
            prev = Some(c);
        }
    }

    pub fn unigram_total(&self) -> u64 {
        self.unigrams.values().sum()
    }

    pub fn bigram_total(&self) -> u64 {
        self.bigrams.values().sum()
    }

    pub fn trigram_total(&self) -> u64 {
        self.trigrams.values().sum()
    }
}
