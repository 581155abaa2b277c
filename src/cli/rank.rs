//! Rank command - interactive bigram difficulty ranking

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::ProjectConfig;
use crate::ranker::{shuffled_motions, ConsoleJudge, Ranker, VerdictCache};

pub fn run(root: &Path, cache_override: Option<&Path>, seed: u64) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let cache_path = cache_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.cache_path(root));

    let cache = VerdictCache::load(&cache_path)
        .with_context(|| format!("loading verdict cache {}", cache_path.display()))?;
    eprintln!(
        "{} verdicts loaded from {}",
        style(cache.len()).bold(),
        cache_path.display()
    );

    let motions = shuffled_motions(seed);
    let mut ranker = Ranker::new(cache, ConsoleJudge);
    let ranked = ranker.rank(motions)?;

    for motion in &ranked {
        println!("{}", motion);
    }
    eprintln!(
        "\nRanked {} motion classes ({} new judgments this run)",
        style(ranked.len()).bold(),
        ranker.prompts()
    );
    Ok(())
}
