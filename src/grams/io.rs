//! Frequency-table file I/O
//!
//! Plain text, UTF-8. First line is the raw total, then one line per n-gram
//! with its normalized frequency, keys sorted, fields space-separated. All
//! numbers carry 18 fractional digits so distributions survive a round trip
//! without drift.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Which table a file holds; decides the filename prefix and key width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GramKind {
    Unigrams,
    Bigrams,
    Trigrams,
}

impl GramKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            GramKind::Unigrams => "unigrams",
            GramKind::Bigrams => "bigrams",
            GramKind::Trigrams => "trigrams",
        }
    }
}

/// `<data_dir>/<prefix>_<suffix>.data`
pub fn gram_path(data_dir: &Path, kind: GramKind, suffix: &str) -> PathBuf {
    data_dir.join(format!("{}_{}.data", kind.prefix(), suffix))
}

pub fn write_unigrams(path: &Path, unigrams: &BTreeMap<char, f64>, total: f64) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "{:.18}", total)?;
    for (c, v) in unigrams {
        writeln!(out, "{} {:.18}", c, v / total)?;
    }
    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_bigrams(path: &Path, bigrams: &BTreeMap<(char, char), f64>, total: f64) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "{:.18}", total)?;
    for ((c1, c2), v) in bigrams {
        writeln!(out, "{} {} {:.18}", c1, c2, v / total)?;
    }
    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_trigrams(
    path: &Path,
    trigrams: &BTreeMap<(char, char, char), f64>,
    total: f64,
) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "{:.18}", total)?;
    for ((c1, c2, c3), v) in trigrams {
        writeln!(out, "{} {} {} {:.18}", c1, c2, c3, v / total)?;
    }
    std::fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

pub fn read_unigrams(path: &Path) -> Result<BTreeMap<char, f64>> {
    let mut unigrams = BTreeMap::new();
    for (line_no, fields) in read_gram_lines(path, 2)? {
        let c = single_char(&fields[0]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        unigrams.insert(c, parse_freq(&fields[1], path, line_no)?);
    }
    Ok(unigrams)
}

pub fn read_bigrams(path: &Path) -> Result<BTreeMap<(char, char), f64>> {
    let mut bigrams = BTreeMap::new();
    for (line_no, fields) in read_gram_lines(path, 3)? {
        let c1 = single_char(&fields[0]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        let c2 = single_char(&fields[1]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        bigrams.insert((c1, c2), parse_freq(&fields[2], path, line_no)?);
    }
    Ok(bigrams)
}

pub fn read_trigrams(path: &Path) -> Result<BTreeMap<(char, char, char), f64>> {
    let mut trigrams = BTreeMap::new();
    for (line_no, fields) in read_gram_lines(path, 4)? {
        let c1 = single_char(&fields[0]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        let c2 = single_char(&fields[1]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        let c3 = single_char(&fields[2]).with_context(|| format!("{}:{}", path.display(), line_no))?;
        trigrams.insert((c1, c2, c3), parse_freq(&fields[3], path, line_no)?);
    }
    Ok(trigrams)
}

/// Split a gram file into per-line field vectors, skipping the total header.
/// A line with the wrong field count is fatal: a half-parsed distribution
/// would silently skew whatever it gets combined into.
fn read_gram_lines(path: &Path, fields_per_line: usize) -> Result<Vec<(usize, Vec<String>)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read gram file {}", path.display()))?;
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split(' ').map(str::to_string).collect();
        if fields.len() != fields_per_line {
            bail!(
                "malformed line {} in {}: '{}' (expected {} fields, got {})",
                idx + 1,
                path.display(),
                line,
                fields_per_line,
                fields.len()
            );
        }
        rows.push((idx + 1, fields));
    }
    Ok(rows)
}

fn single_char(field: &str) -> Result<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("expected a single character, got '{}'", field),
    }
}

fn parse_freq(field: &str, path: &Path, line_no: usize) -> Result<f64> {
    field
        .parse()
        .with_context(|| format!("bad frequency at {}:{}", path.display(), line_no))
}
