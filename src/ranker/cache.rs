//! Verdict cache - persisted pairwise comparison judgments
//!
//! An append-only text file, one relation per line:
//! `index down1 middle < middle down1 index`. The file is re-read in full at
//! startup; every new judgment is appended before the comparator returns, so
//! an interrupted ranking run loses no answers.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::{Motion, Verdict};

/// Fatal verdict-cache errors. A malformed or self-contradictory cache would
/// silently bias the ranking, so loading aborts instead of skipping lines.
#[derive(Debug, thiserror::Error)]
pub enum RelationError {
    #[error("failed to read verdict cache {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to append to verdict cache {path}: {source}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed verdict-cache line {line_no}: '{line}' ({reason})")]
    Malformed {
        line_no: usize,
        line: String,
        reason: String,
    },

    #[error(
        "contradictory verdicts for '{a}' vs '{b}': cache records both '{a} {first}' and \
         an incompatible '{second}' (line {line_no})"
    )]
    Contradiction {
        a: Motion,
        b: Motion,
        first: Verdict,
        second: Verdict,
        line_no: usize,
    },
}

/// In-memory view of the verdict-cache file.
#[derive(Debug)]
pub struct VerdictCache {
    path: PathBuf,
    verdicts: HashMap<(Motion, Motion), Verdict>,
}

impl VerdictCache {
    /// Load the cache file. A missing file is an empty cache; anything the
    /// parser cannot account for is fatal.
    pub fn load(path: &Path) -> Result<Self, RelationError> {
        let mut cache = Self {
            path: path.to_path_buf(),
            verdicts: HashMap::new(),
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no verdict cache at {}, starting empty", path.display());
                return Ok(cache);
            }
            Err(source) => {
                return Err(RelationError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }
            let (a, b, verdict) = parse_relation(line, line_no)?;
            cache.insert_checked(a, b, verdict, line_no)?;
        }

        tracing::debug!(
            "loaded {} verdicts from {}",
            cache.verdicts.len(),
            path.display()
        );
        Ok(cache)
    }

    /// Insert a loaded relation, rejecting contradictions in either
    /// orientation. A repeated identical answer is fine (the log is
    /// append-only and legitimately repeats).
    fn insert_checked(
        &mut self,
        a: Motion,
        b: Motion,
        verdict: Verdict,
        line_no: usize,
    ) -> Result<(), RelationError> {
        if let Some(&prior) = self.verdicts.get(&(a, b)) {
            if prior != verdict {
                return Err(RelationError::Contradiction {
                    a,
                    b,
                    first: prior,
                    second: verdict,
                    line_no,
                });
            }
            return Ok(());
        }
        if let Some(&reverse) = self.verdicts.get(&(b, a)) {
            if reverse.invert() != verdict {
                return Err(RelationError::Contradiction {
                    a: b,
                    b: a,
                    first: reverse,
                    second: verdict,
                    line_no,
                });
            }
            // Consistent restatement of the stored orientation; lookup
            // already answers both directions, so keep the one entry.
            return Ok(());
        }
        self.verdicts.insert((a, b), verdict);
        Ok(())
    }

    /// Look up a pair in both orientations. The reverse orientation comes
    /// back inverted, so callers always see the relation from `a`'s side.
    pub fn lookup(&self, a: Motion, b: Motion) -> Option<Verdict> {
        if let Some(&verdict) = self.verdicts.get(&(a, b)) {
            tracing::info!("reusing cached verdict: {} {} {}", a, verdict, b);
            return Some(verdict);
        }
        if let Some(&verdict) = self.verdicts.get(&(b, a)) {
            let inverted = verdict.invert();
            tracing::info!("reusing cached verdict (inverted): {} {} {}", a, inverted, b);
            return Some(inverted);
        }
        None
    }

    /// Record a fresh judgment: append to the file first, then to memory.
    /// Open-append-close per write keeps the file valid up to the last
    /// completed answer if the process dies mid-run.
    pub fn record(&mut self, a: Motion, b: Motion, verdict: Verdict) -> Result<(), RelationError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| RelationError::Append {
                path: self.path.clone(),
                source,
            })?;
        writeln!(file, "{} {} {}", a, verdict, b).map_err(|source| RelationError::Append {
            path: self.path.clone(),
            source,
        })?;
        self.verdicts.insert((a, b), verdict);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse one cache line: `f1 r f2 <sym> f1' r' f2'`.
fn parse_relation(line: &str, line_no: usize) -> Result<(Motion, Motion, Verdict), RelationError> {
    let malformed = |reason: String| RelationError::Malformed {
        line_no,
        line: line.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 7 {
        return Err(malformed(format!("expected 7 fields, got {}", fields.len())));
    }

    let a = parse_motion(&fields[0..3]).map_err(&malformed)?;
    let verdict = Verdict::from_symbol(fields[3])
        .ok_or_else(|| malformed(format!("unrecognized relation symbol '{}'", fields[3])))?;
    let b = parse_motion(&fields[4..7]).map_err(&malformed)?;

    Ok((a, b, verdict))
}

fn parse_motion(fields: &[&str]) -> Result<Motion, String> {
    Ok(Motion::new(
        fields[0].parse()?,
        fields[1].parse()?,
        fields[2].parse()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Finger, RowOffset};
    use std::io::Write as _;

    fn motion(s: &str) -> Motion {
        let fields: Vec<&str> = s.split(' ').collect();
        parse_motion(&fields).unwrap()
    }

    fn cache_with(lines: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bigram_cmp");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{}", lines).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_empty_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = VerdictCache::load(&dir.path().join("absent")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_forward_and_reverse_lookup() {
        let (_dir, path) = cache_with("index down1 middle < middle down1 index\n");
        let cache = VerdictCache::load(&path).unwrap();

        let a = motion("index down1 middle");
        let b = motion("middle down1 index");
        assert_eq!(cache.lookup(a, b), Some(Verdict::Easier));
        // Reverse orientation comes back inverted
        assert_eq!(cache.lookup(b, a), Some(Verdict::Harder));
        assert_eq!(cache.lookup(a, motion("ring up1 pinky")), None);
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let (_dir, path) = cache_with("index down1 middle <\n");
        let err = VerdictCache::load(&path).unwrap_err();
        assert!(matches!(err, RelationError::Malformed { line_no: 1, .. }));

        let (_dir, path) = cache_with("index down1 middle ? middle down1 index\n");
        let err = VerdictCache::load(&path).unwrap_err();
        assert!(err.to_string().contains("unrecognized relation symbol"));

        let (_dir, path) = cache_with("index down3 middle < middle down1 index\n");
        assert!(VerdictCache::load(&path).is_err());
    }

    #[test]
    fn test_contradictory_orientations_rejected() {
        let (_dir, path) = cache_with(
            "index down1 middle < middle down1 index\n\
             middle down1 index < index down1 middle\n",
        );
        let err = VerdictCache::load(&path).unwrap_err();
        assert!(matches!(err, RelationError::Contradiction { line_no: 2, .. }));
    }

    #[test]
    fn test_repeated_consistent_lines_allowed() {
        let (_dir, path) = cache_with(
            "index down1 middle < middle down1 index\n\
             index down1 middle < middle down1 index\n\
             middle down1 index > index down1 middle\n",
        );
        let cache = VerdictCache::load(&path).unwrap();
        // One relation, however often the log restates it
        assert_eq!(cache.len(), 1);

        // Both orientations still resolve through the single stored entry
        let a = motion("index down1 middle");
        let b = motion("middle down1 index");
        assert_eq!(cache.lookup(a, b), Some(Verdict::Easier));
        assert_eq!(cache.lookup(b, a), Some(Verdict::Harder));
    }

    #[test]
    fn test_record_appends_and_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bigram_cmp");
        let mut cache = VerdictCache::load(&path).unwrap();

        let a = Motion::new(Finger::Ring, RowOffset::Up2, Finger::Pinky);
        let b = Motion::new(Finger::Index, RowOffset::Same, Finger::Middle);
        cache.record(a, b, Verdict::Harder).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "ring up2 pinky > index same middle\n");

        let reloaded = VerdictCache::load(&path).unwrap();
        assert_eq!(reloaded.lookup(a, b), Some(Verdict::Harder));
        assert_eq!(reloaded.lookup(b, a), Some(Verdict::Easier));
    }
}
