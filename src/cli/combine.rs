//! Combine command - merge two frequency-table sets

use anyhow::Result;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::grams::{
    combine_dist, gram_path, read_bigrams, read_trigrams, read_unigrams, write_bigrams,
    write_trigrams, write_unigrams, GramKind,
};

pub fn run(root: &Path, layer: &str, suffix1: &str, suffix2: &str) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let data_dir = config.data_path(root);

    let s1 = format!("{}_{}", suffix1, layer);
    let s2 = format!("{}_{}", suffix2, layer);

    let uni1 = read_unigrams(&gram_path(&data_dir, GramKind::Unigrams, &s1))?;
    let uni2 = read_unigrams(&gram_path(&data_dir, GramKind::Unigrams, &s2))?;
    let bi1 = read_bigrams(&gram_path(&data_dir, GramKind::Bigrams, &s1))?;
    let bi2 = read_bigrams(&gram_path(&data_dir, GramKind::Bigrams, &s2))?;
    let tri1 = read_trigrams(&gram_path(&data_dir, GramKind::Trigrams, &s1))?;
    let tri2 = read_trigrams(&gram_path(&data_dir, GramKind::Trigrams, &s2))?;

    // Inputs are already normalized, so the merged total is 1.0 by construction
    let out_suffix = format!("combined_{}", layer);
    write_unigrams(
        &gram_path(&data_dir, GramKind::Unigrams, &out_suffix),
        &combine_dist(&uni1, &uni2),
        1.0,
    )?;
    write_bigrams(
        &gram_path(&data_dir, GramKind::Bigrams, &out_suffix),
        &combine_dist(&bi1, &bi2),
        1.0,
    )?;
    write_trigrams(
        &gram_path(&data_dir, GramKind::Trigrams, &out_suffix),
        &combine_dist(&tri1, &tri2),
        1.0,
    )?;

    println!("Wrote *_{}.data from {} and {}", out_suffix, s1, s2);
    Ok(())
}
