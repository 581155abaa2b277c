//! Table command - render the bigram weight grid

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ProjectConfig;
use crate::weights::WeightGrid;

pub fn run(root: &Path, file_override: Option<&Path>) -> Result<()> {
    let config = ProjectConfig::load(root)?;
    let weights_path = file_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.weights_path(root));

    let grid = WeightGrid::load(&weights_path)
        .with_context(|| format!("loading weights {}", weights_path.display()))?;
    print!("{}", grid.render()?);
    Ok(())
}
