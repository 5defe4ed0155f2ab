use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::DEFAULT_FILE_PREFIX;

/// Optional configuration loaded from `~/.config/owui-urls/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Prefix of generated file names (`<prefix>-<host>.md`).
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Directory documents are written to (None = current working directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            output_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Output directory, falling back to the current working directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("determine current directory"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs.get_config_home().join("owui-urls").join("config.toml"))
}

/// Load configuration from disk; a missing file means defaults. Nothing is created.
pub fn load_or_default() -> Result<GeneratorConfig> {
    let path = config_path()?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<GeneratorConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(GeneratorConfig::default());
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GeneratorConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
