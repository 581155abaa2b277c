//! Bigram weight table rendering
//!
//! Reads the header-less weights file (`f1 r f2 weight` per line) and lays
//! the values out as a fixed grid: one block per first finger, one row per
//! second finger, one tab-separated column per row offset.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use crate::models::{Finger, Motion, RowOffset};

/// Numeric weights keyed by motion. Values are kept as the file's literal
/// text so rendering never reformats what the operator wrote.
#[derive(Debug, Default)]
pub struct WeightGrid {
    weights: HashMap<Motion, String>,
}

impl WeightGrid {
    /// Load a weights file. The four stationary same-finger cells default to
    /// `0.0`; everything else must come from the file.
    pub fn load(path: &Path) -> Result<Self> {
        let mut grid = Self::default();
        for &finger in Finger::all() {
            grid.weights
                .insert(Motion::new(finger, RowOffset::Same, finger), "0.0".to_string());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read weights file {}", path.display()))?;
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 4 {
                bail!(
                    "malformed weights line {}: '{}' (expected 4 fields, got {})",
                    idx + 1,
                    line,
                    fields.len()
                );
            }
            let motion = Motion::new(
                fields[0]
                    .parse()
                    .map_err(|e| anyhow::anyhow!("weights line {}: {}", idx + 1, e))?,
                fields[1]
                    .parse()
                    .map_err(|e| anyhow::anyhow!("weights line {}: {}", idx + 1, e))?,
                fields[2]
                    .parse()
                    .map_err(|e| anyhow::anyhow!("weights line {}: {}", idx + 1, e))?,
            );
            grid.weights.insert(motion, fields[3].to_string());
        }
        Ok(grid)
    }

    pub fn get(&self, motion: &Motion) -> Option<&str> {
        self.weights.get(motion).map(String::as_str)
    }

    /// Render the full 4x4 grid of offset columns. A cell with no weight is
    /// an error: a silently blank cell would be indistinguishable from a
    /// deliberate zero when eyeballing the table.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        for &first in Finger::all() {
            for &second in Finger::all() {
                let mut cells = Vec::with_capacity(RowOffset::all().len());
                for &offset in RowOffset::all() {
                    let motion = Motion::new(first, offset, second);
                    let Some(weight) = self.get(&motion) else {
                        bail!("no weight recorded for '{}'", motion);
                    };
                    cells.push(weight.to_string());
                }
                writeln!(out, "{}", cells.join("\t"))?;
            }
            out.push('\n');
        }
        Ok(out)
    }
}
