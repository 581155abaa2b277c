//! Configuration module for keymetry
//!
//! Project-level configuration (`keymetry.toml` in the project root):
//! - data/cfg directory locations
//! - ranker cache and weights file names
//! - per-layer allowed character sets for n-gram counting
//!
//! Every field has a default, so a missing config file just means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "keymetry.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Where frequency tables and filelists live
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Where the verdict cache and weight table live
    #[serde(default = "default_cfg_dir")]
    pub cfg_dir: PathBuf,

    #[serde(default)]
    pub ranker: RankerConfig,

    /// Layer name -> allowed character set
    #[serde(default = "default_layers")]
    pub layers: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RankerConfig {
    /// Verdict-cache filename inside cfg_dir
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Weight-table filename inside cfg_dir
    #[serde(default = "default_weights_file")]
    pub weights_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_cfg_dir() -> PathBuf {
    PathBuf::from("cfg")
}

fn default_cache_file() -> String {
    "bigram_cmp".to_string()
}

fn default_weights_file() -> String {
    "bigram_weights".to_string()
}

fn default_layers() -> BTreeMap<String, String> {
    let mut layers = BTreeMap::new();
    layers.insert(
        "layer0".to_string(),
        "abcdefghijklmnopqrstuvwxyz;,./".to_string(),
    );
    layers.insert(
        "layer1".to_string(),
        "|*{}\"+_789#!()'=-456@&[]$\\0123".to_string(),
    );
    layers
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            cache_file: default_cache_file(),
            weights_file: default_weights_file(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cfg_dir: default_cfg_dir(),
            ranker: RankerConfig::default(),
            layers: default_layers(),
        }
    }
}

impl ProjectConfig {
    /// Load `keymetry.toml` from the project root, or defaults if absent.
    /// A config file that exists but does not parse is an error; silently
    /// falling back to defaults would mask typos.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if !path.exists() {
            tracing::debug!("no {} at {}, using defaults", CONFIG_FILENAME, root.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn cache_path(&self, root: &Path) -> PathBuf {
        root.join(&self.cfg_dir).join(&self.ranker.cache_file)
    }

    pub fn weights_path(&self, root: &Path) -> PathBuf {
        root.join(&self.cfg_dir).join(&self.ranker.weights_file)
    }

    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }

    /// Allowed character set for a named layer.
    pub fn layer(&self, name: &str) -> Result<&str> {
        self.layers
            .get(name)
            .map(String::as_str)
            .with_context(|| {
                format!(
                    "unknown layer '{}' (configured: {})",
                    name,
                    self.layers.keys().cloned().collect::<Vec<_>>().join(", ")
                )
            })
    }
}
