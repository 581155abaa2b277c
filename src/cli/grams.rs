//! Grams command - build frequency tables from a corpus filelist

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::grams::{gram_path, normalize, write_bigrams, write_trigrams, write_unigrams, GramCounts, GramKind};

pub fn run(root: &Path, filelist: &str, layer: &str) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let allowed = config.layer(layer)?;
    let data_dir = config.data_path(root);

    let filelist_path = data_dir.join(format!("filelist_{}", filelist));
    let files: Vec<String> = std::fs::read_to_string(&filelist_path)
        .with_context(|| format!("failed to read filelist {}", filelist_path.display()))?
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut counts = GramCounts::new();
    let mut skipped = 0usize;
    for file in &files {
        pb.set_message(file.clone());
        match std::fs::read_to_string(file) {
            Ok(text) => counts.feed(&normalize(&text), allowed),
            Err(e) => {
                tracing::warn!("skipping unreadable corpus file {}: {}", file, e);
                skipped += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let suffix = format!("{}_{}", filelist, layer);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let unigrams: BTreeMap<char, f64> =
        counts.unigrams.iter().map(|(&k, &v)| (k, v as f64)).collect();
    let bigrams: BTreeMap<(char, char), f64> =
        counts.bigrams.iter().map(|(&k, &v)| (k, v as f64)).collect();
    let trigrams: BTreeMap<(char, char, char), f64> =
        counts.trigrams.iter().map(|(&k, &v)| (k, v as f64)).collect();

    write_unigrams(
        &gram_path(&data_dir, GramKind::Unigrams, &suffix),
        &unigrams,
        counts.unigram_total() as f64,
    )?;
    write_bigrams(
        &gram_path(&data_dir, GramKind::Bigrams, &suffix),
        &bigrams,
        counts.bigram_total() as f64,
    )?;
    write_trigrams(
        &gram_path(&data_dir, GramKind::Trigrams, &suffix),
        &trigrams,
        counts.trigram_total() as f64,
    )?;

    println!(
        "Counted {} files ({} skipped): {} unigrams, {} bigrams, {} trigrams -> *_{}.data",
        files.len() - skipped,
        skipped,
        unigrams.len(),
        bigrams.len(),
        trigrams.len(),
        suffix
    );
    Ok(())
}
