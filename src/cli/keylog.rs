//! Keylog command - key-press timing analysis

use anyhow::{Context, Result};
use std::path::Path;

use crate::keylog::{clean, histogram, parse_log, press_times};

pub fn run(file: &Path, mode: &str, shifted: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read keylog {}", file.display()))?;
    let events = parse_log(&content);

    match mode {
        "press-times" => {
            for (key, ms) in press_times(&events) {
                println!("{} {}", key, ms);
            }
        }
        "histogram" => {
            for (count, key) in histogram(&events, shifted) {
                println!("{} {}", count, key);
            }
        }
        "clean" => {
            for c in clean(&events) {
                println!("{}", c);
            }
        }
        other => anyhow::bail!("unknown keylog mode '{}'", other),
    }
    Ok(())
}
