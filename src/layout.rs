//! Layout-analyzer config export
//!
//! Fills a keyboard-layout-analyzer template JSON
//! (https://stevep99.github.io/keyboard-layout-analyzer/#/config) with a
//! 30-key layout. Placeholder keys in the template carry `"primary": 0`;
//! each gets the next layout character's codepoint plus its shifted
//! counterpart.

use anyhow::{bail, Context, Result};
use serde_json::Value;

/// The template has exactly this many placeholder key slots (3 rows x 10).
pub const LAYOUT_KEYS: usize = 30;

/// The character a key produces with shift held.
pub fn shifted_char(c: char) -> Result<char> {
    if c.is_ascii_lowercase() {
        return Ok(c.to_ascii_uppercase());
    }
    let shifted = match c {
        '`' => '~',
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '[' => '{',
        ']' => '}',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '=' => '+',
        '-' => '_',
        '\\' => '|',
        ';' => ':',
        _ => bail!("no shifted form known for key '{}'", c),
    };
    Ok(shifted)
}

/// Parse the whitespace-separated layout source into its 30 key characters.
pub fn parse_layout(source: &str) -> Result<Vec<char>> {
    let mut keys = Vec::new();
    for field in source.to_lowercase().split_whitespace() {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => keys.push(c),
            _ => bail!("layout key '{}' is not a single character", field),
        }
    }
    if keys.len() != LAYOUT_KEYS {
        bail!("layout has {} keys, expected {}", keys.len(), LAYOUT_KEYS);
    }
    Ok(keys)
}

/// Fill every `"primary": 0` placeholder in the template's key list with the
/// next layout character. The filled count must come out at exactly 30.
pub fn fill_template(template: &mut Value, keys: &[char]) -> Result<()> {
    let slots = template
        .get_mut("keys")
        .and_then(Value::as_array_mut)
        .context("template has no 'keys' array")?;

    let mut idx = 0;
    for slot in slots.iter_mut() {
        if slot.get("primary").and_then(Value::as_u64) != Some(0) {
            continue;
        }
        let Some(&c) = keys.get(idx) else {
            bail!(
                "template has more than {} placeholder keys, layout exhausted",
                keys.len()
            );
        };
        slot["primary"] = Value::from(c as u32);
        slot["shift"] = Value::from(shifted_char(c)? as u32);
        idx += 1;
    }

    if idx != LAYOUT_KEYS {
        bail!("template has {} placeholder keys, expected {}", idx, LAYOUT_KEYS);
    }
    Ok(())
}
