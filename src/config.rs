use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::SuffixFormat;
use crate::error::Result;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Prefix of release tags (e.g., "v" for "v1.2.3")
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub suffix: SuffixConfig,
}

/// Returns the default tag prefix.
fn default_prefix() -> String {
    "v".to_string()
}

/// Configuration for build suffixes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SuffixConfig {
    /// Always append a suffix to the computed version
    #[serde(default)]
    pub always: bool,

    #[serde(default)]
    pub format: SuffixFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: default_prefix(),
            suffix: SuffixConfig::default(),
        }
    }
}

/// Resolve which configuration file applies, if any.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `semver-bump.toml` in current directory
/// 3. `semver-bump.toml` in the user config directory
fn config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists (or was named explicitly) but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = config_file(config_path) else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    Ok(config)
}
