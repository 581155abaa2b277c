//! Core data models for keymetry
//!
//! Fingers, row offsets, finger-movement motions, and pairwise verdicts.
//! These are shared by the ranker, the weight table, and the CLI.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A finger on one hand. Thumbs never participate in movement ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub fn all() -> &'static [Finger] {
        &[Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Finger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(Finger::Index),
            "middle" => Ok(Finger::Middle),
            "ring" => Ok(Finger::Ring),
            "pinky" => Ok(Finger::Pinky),
            other => Err(format!("unknown finger '{}'", other)),
        }
    }
}

/// Row movement between the two keys of a bigram, from the first key's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowOffset {
    Down2,
    Down1,
    Same,
    Up1,
    Up2,
}

impl RowOffset {
    pub fn all() -> &'static [RowOffset] {
        &[
            RowOffset::Down2,
            RowOffset::Down1,
            RowOffset::Same,
            RowOffset::Up1,
            RowOffset::Up2,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RowOffset::Down2 => "down2",
            RowOffset::Down1 => "down1",
            RowOffset::Same => "same",
            RowOffset::Up1 => "up1",
            RowOffset::Up2 => "up2",
        }
    }
}

impl fmt::Display for RowOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RowOffset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "down2" => Ok(RowOffset::Down2),
            "down1" => Ok(RowOffset::Down1),
            "same" => Ok(RowOffset::Same),
            "up1" => Ok(RowOffset::Up1),
            "up2" => Ok(RowOffset::Up2),
            other => Err(format!("unknown row offset '{}'", other)),
        }
    }
}

/// A two-key finger movement: first finger, row offset, second finger.
///
/// Rendered everywhere as space-joined lowercase fields, e.g.
/// `index down1 middle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Motion {
    pub first: Finger,
    pub offset: RowOffset,
    pub second: Finger,
}

impl Motion {
    pub fn new(first: Finger, offset: RowOffset, second: Finger) -> Self {
        Self {
            first,
            offset,
            second,
        }
    }

    /// Enumerate every motion class in deterministic order.
    ///
    /// Same-finger motions with no row movement are excluded: their
    /// difficulty is ill-defined (the finger does not move).
    pub fn enumerate() -> Vec<Motion> {
        let mut motions = Vec::new();
        for &first in Finger::all() {
            for &offset in RowOffset::all() {
                for &second in Finger::all() {
                    if first == second && offset == RowOffset::Same {
                        continue;
                    }
                    motions.push(Motion::new(first, offset, second));
                }
            }
        }
        motions
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.offset, self.second)
    }
}

/// Outcome of a pairwise difficulty comparison, from the left operand's
/// point of view: `Easier` means "left is easier than right".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Easier,
    Equal,
    Harder,
}

impl Verdict {
    /// The relation symbol recorded in the verdict-cache file.
    pub fn symbol(&self) -> char {
        match self {
            Verdict::Easier => '<',
            Verdict::Equal => '=',
            Verdict::Harder => '>',
        }
    }

    pub fn from_symbol(sym: &str) -> Option<Verdict> {
        match sym {
            "<" => Some(Verdict::Easier),
            "=" => Some(Verdict::Equal),
            ">" => Some(Verdict::Harder),
            _ => None,
        }
    }

    /// The same relation seen from the other operand.
    pub fn invert(&self) -> Verdict {
        match self {
            Verdict::Easier => Verdict::Harder,
            Verdict::Equal => Verdict::Equal,
            Verdict::Harder => Verdict::Easier,
        }
    }

    pub fn ordering(&self) -> Ordering {
        match self {
            Verdict::Easier => Ordering::Less,
            Verdict::Equal => Ordering::Equal,
            Verdict::Harder => Ordering::Greater,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
