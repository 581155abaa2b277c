//! Key-press timing log analysis
//!
//! The logger writes one event per line: `<t_us> <KEY> <pressed>` with the
//! timestamp in microseconds and pressed 1 for press, 0 for release. These
//! logs come from a long-running logger and routinely end mid-line, so a
//! malformed line is warned about and skipped, not fatal.

use std::collections::HashMap;

/// Only inter-press gaps below this count toward mean press times; longer
/// gaps are pauses, not typing.
const PRESS_GAP_THRESHOLD_US: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub t_us: u64,
    pub key: String,
    pub pressed: bool,
}

/// Parse a timing log, skipping lines that do not scan.
pub fn parse_log(content: &str) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(line) {
            Some(event) => events.push(event),
            None => tracing::warn!("skipping malformed keylog line {}: '{}'", idx + 1, line),
        }
    }
    events
}

fn parse_event(line: &str) -> Option<KeyEvent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return None;
    }
    let t_us: u64 = fields[0].parse().ok()?;
    let pressed = match fields[2] {
        "0" => false,
        "1" => true,
        _ => return None,
    };
    Some(KeyEvent {
        t_us,
        key: fields[1].to_string(),
        pressed,
    })
}

/// Mean interval between consecutive presses per key, in milliseconds,
/// counting only gaps under one second. Sorted by key for stable output.
pub fn press_times(events: &[KeyEvent]) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (u64, u64)> = HashMap::new();
    let mut prev_t = 0u64;
    for event in events.iter().filter(|e| e.pressed) {
        let gap = event.t_us.saturating_sub(prev_t);
        if event.t_us >= prev_t && gap < PRESS_GAP_THRESHOLD_US {
            let entry = sums.entry(&event.key).or_insert((0, 0));
            entry.0 += gap;
            entry.1 += 1;
        }
        prev_t = event.t_us;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(key, (total_us, count))| {
            (key.to_string(), total_us as f64 / count as f64 / 1000.0)
        })
        .collect();
    means.sort_by(|a, b| a.0.cmp(&b.0));
    means
}

/// Press counts per key, most frequent first. With `shifted`, presses made
/// while LSHIFT is held are counted under their shifted symbol.
pub fn histogram(events: &[KeyEvent], shifted: bool) -> Vec<(u64, String)> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut shift_held = false;
    for event in events {
        if event.key == "LSHIFT" {
            shift_held = event.pressed;
        }
        if !event.pressed {
            continue;
        }
        let key = if shifted && shift_held {
            shifted_symbol(&event.key)
        } else {
            event.key.clone()
        };
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut rows: Vec<(u64, String)> = counts.into_iter().map(|(k, v)| (v, k)).collect();
    rows.sort_by(|a, b| b.cmp(a));
    rows
}

/// The character stream actually typed: letters plus the four home-layer
/// punctuation keys, everything else dropped.
pub fn clean(events: &[KeyEvent]) -> Vec<char> {
    let mut chars = Vec::new();
    for event in events.iter().filter(|e| e.pressed) {
        let key = event.key.to_lowercase();
        match key.as_str() {
            "dot" => chars.push('.'),
            "semicolon" => chars.push(';'),
            "comma" => chars.push(','),
            "slash" => chars.push('/'),
            k => {
                let mut it = k.chars();
                if let (Some(c), None) = (it.next(), it.next()) {
                    if c.is_ascii_lowercase() {
                        chars.push(c);
                    }
                }
            }
        }
    }
    chars
}

/// What a key reads as while LSHIFT is held. Keys without a distinct shifted
/// form (modifiers, function keys, arrows) map to themselves.
pub fn shifted_symbol(key: &str) -> String {
    match key {
        "0" => ")".into(),
        "1" => "!".into(),
        "2" => "@".into(),
        "3" => "#".into(),
        "4" => "$".into(),
        "5" => "%".into(),
        "6" => "^".into(),
        "7" => "&".into(),
        "8" => "*".into(),
        "9" => "(".into(),
        "EQUAL" => "PLUS".into(),
        "SEMICOLON" => "COLON".into(),
        "DOT" => "GT".into(),
        "COMMA" => "LT".into(),
        "APOSTROPHE" => "\"".into(),
        "GRAVE" => "~".into(),
        "BACKSLASH" => "|".into(),
        "LBRACE" => "{".into(),
        "RBRACE" => "}".into(),
        "SLASH" => "QMARK".into(),
        "MINUS" => "UNDERSCORE".into(),
        other => other.to_string(),
    }
}
