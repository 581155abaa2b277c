//! CLI command definitions and handlers

mod combine;
mod convert;
mod grams;
mod keylog;
mod rank;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keymetry - keyboard layout design toolkit
#[derive(Parser, Debug)]
#[command(name = "keymetry")]
#[command(
    version,
    about = "Keyboard layout design toolkit — rank bigram difficulty, build n-gram tables, analyze key timing",
    after_help = "\
Examples:
  keymetry rank                          Rank bigram difficulty interactively
  keymetry table                         Render the bigram weight grid
  keymetry grams dropbox --layer layer0  Count n-grams over a corpus filelist
  keymetry combine layer0 prose code     Merge two distributions 50/50
  keymetry keylog data/keys_time.data histogram --shifted
  keymetry convert data/analyzer.json data/layout.txt"
)]
pub struct Cli {
    /// Project root containing keymetry.toml, cfg/ and data/ (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank bigram motion classes by difficulty via pairwise comparison
    ///
    /// Sorts every (finger, row-offset, finger) motion class "easier first".
    /// Comparisons come from the verdict cache when possible; only genuinely
    /// new pairs prompt, and each answer is appended to the cache before the
    /// sort continues.
    #[command(after_help = "\
Examples:
  keymetry rank                          Rank with the configured cache
  keymetry rank --cache /tmp/cmp         Use a different verdict-cache file
  RUST_LOG=info keymetry rank            Show cache-reuse logging")]
    Rank {
        /// Verdict-cache file (default: <cfg_dir>/bigram_cmp)
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Shuffle seed for reproducible tie-breaking
        #[arg(long, default_value_t = crate::ranker::SHUFFLE_SEED)]
        seed: u64,
    },

    /// Render the bigram weight table as a fixed grid
    Table {
        /// Weights file (default: <cfg_dir>/bigram_weights)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Build unigram/bigram/trigram frequency tables from a corpus filelist
    ///
    /// Reads <data_dir>/filelist_<FILELIST> (one corpus path per line) and
    /// writes unigrams_/bigrams_/trigrams_<FILELIST>_<layer>.data. Unreadable
    /// corpus files are skipped with a warning.
    Grams {
        /// Filelist name (resolved to <data_dir>/filelist_<FILELIST>)
        filelist: String,

        /// Layer whose character set to count
        #[arg(long, default_value = "layer0")]
        layer: String,
    },

    /// Merge two frequency-table sets 50/50 into *_combined_<layer>.data
    Combine {
        /// Layer the tables were built for
        layer: String,

        /// First table suffix (as passed to grams)
        suffix1: String,

        /// Second table suffix
        suffix2: String,
    },

    /// Analyze a key-press timing log
    Keylog {
        /// Timing log file (lines of `<t_us> <KEY> <0|1>`)
        file: PathBuf,

        /// What to report
        #[arg(value_parser = ["press-times", "histogram", "clean"])]
        mode: String,

        /// In histogram mode, map presses made with LSHIFT held to their shifted symbols
        #[arg(long)]
        shifted: bool,
    },

    /// Fill a keyboard-layout-analyzer template JSON with a 30-key layout
    Convert {
        /// Template JSON with `"primary": 0` placeholder keys
        template: PathBuf,

        /// Layout file: 30 whitespace-separated single-character keys
        layout: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Rank { cache, seed } => rank::run(&cli.root, cache.as_deref(), seed),
        Commands::Table { file } => table::run(&cli.root, file.as_deref()),
        Commands::Grams { filelist, layer } => grams::run(&cli.root, &filelist, &layer),
        Commands::Combine {
            layer,
            suffix1,
            suffix2,
        } => combine::run(&cli.root, &layer, &suffix1, &suffix2),
        Commands::Keylog {
            file,
            mode,
            shifted,
        } => keylog::run(&file, &mode, shifted),
        Commands::Convert { template, layout } => convert::run(&template, &layout),
    }
}
