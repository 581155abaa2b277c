//! Bigram difficulty ranker
//!
//! Produces a total "easier first" order over the motion classes using as few
//! human judgments as possible. The comparator first consults the persisted
//! verdict cache in both orientations; only a genuine miss reaches the
//! operator, and the answer is durably appended before the sort continues.

mod cache;
mod judge;
mod sort;

pub use cache::{RelationError, VerdictCache};
pub use judge::{ConsoleJudge, Judge};
pub use sort::try_sort_by;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Ordering;

use crate::models::Motion;

/// Fixed shuffle seed: ties resolve by post-shuffle order, and reruns must
/// resolve them the same way.
pub const SHUFFLE_SEED: u64 = 42;

/// The enumerated motion set, shuffled reproducibly for tie-breaking.
pub fn shuffled_motions(seed: u64) -> Vec<Motion> {
    let mut motions = Motion::enumerate();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    motions.shuffle(&mut rng);
    motions
}

/// Comparison-sort ranker: a verdict cache plus a judge for cache misses.
pub struct Ranker<J> {
    cache: VerdictCache,
    judge: J,
    prompts: usize,
}

impl<J: Judge> Ranker<J> {
    pub fn new(cache: VerdictCache, judge: J) -> Self {
        Self {
            cache,
            judge,
            prompts: 0,
        }
    }

    /// The three-valued comparator: cache (either orientation), then human.
    pub fn compare(&mut self, a: Motion, b: Motion) -> Result<Ordering> {
        if let Some(verdict) = self.cache.lookup(a, b) {
            return Ok(verdict.ordering());
        }
        let verdict = self.judge.judge(a, b)?;
        self.prompts += 1;
        self.cache.record(a, b, verdict)?;
        Ok(verdict.ordering())
    }

    /// Sort the given motions ascending by "easier first".
    pub fn rank(&mut self, mut motions: Vec<Motion>) -> Result<Vec<Motion>> {
        try_sort_by(&mut motions, &mut |a: &Motion, b: &Motion| {
            self.compare(*a, *b)
        })?;
        Ok(motions)
    }

    /// How many judgments had to be asked of the judge this run.
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    pub fn cache(&self) -> &VerdictCache {
        &self.cache
    }
}
