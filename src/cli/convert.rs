//! Convert command - export a layout as analyzer config JSON

use anyhow::{Context, Result};
use std::path::Path;

use crate::layout::{fill_template, parse_layout};

pub fn run(template_path: &Path, layout_path: &Path) -> Result<()> {
    let template_json = std::fs::read_to_string(template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;
    let mut template: serde_json::Value = serde_json::from_str(&template_json)
        .with_context(|| format!("failed to parse template {}", template_path.display()))?;

    let layout_source = std::fs::read_to_string(layout_path)
        .with_context(|| format!("failed to read layout {}", layout_path.display()))?;
    let keys = parse_layout(&layout_source)?;

    fill_template(&mut template, &keys)?;
    println!("{}", serde_json::to_string(&template)?);
    Ok(())
}
