//! The human-in-the-loop seam
//!
//! The ranker never talks to stdin directly; it asks a `Judge`. The console
//! implementation blocks on the operator, test judges script their answers.

use anyhow::Result;
use console::style;
use std::io::{BufRead, Write};

use crate::models::{Motion, Verdict};

/// Answers "which of these two motions is easier?".
pub trait Judge {
    fn judge(&mut self, a: Motion, b: Motion) -> Result<Verdict>;
}

/// Interactive judge: prompts on stdout, reads answers from stdin.
/// Re-prompts indefinitely on anything other than `a`, `b`, or `0`.
pub struct ConsoleJudge;

impl Judge for ConsoleJudge {
    fn judge(&mut self, a: Motion, b: Motion) -> Result<Verdict> {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            println!("Which is easier:");
            println!("  {} {}", style("a:").bold(), a);
            println!("  {} {}", style("b:").bold(), b);
            print!("a / b / 0: ");
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => anyhow::bail!("stdin closed while waiting for a judgment"),
            };
            match line.trim() {
                "a" => return Ok(Verdict::Easier),
                "b" => return Ok(Verdict::Harder),
                "0" => return Ok(Verdict::Equal),
                other => {
                    println!("Unrecognized answer '{}'. Try again", other);
                }
            }
        }
    }
}
