//! Configuration file loading and parsing.
//!
//! `.langctlrc.json` is discovered by walking up from the working directory
//! until the repository root (a directory containing `.git`). Every field
//! is optional; command-line flags take precedence.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".langctlrc.json";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Remote registry service endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Default project name when `--project` is not passed.
    #[serde(default)]
    pub project: Option<String>,
}

pub fn default_config_json() -> Result<String> {
    serde_json::to_string_pretty(&Config::default()).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config file, or defaults when none exists. A config
/// file that exists but does not parse is a fatal error.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}
