use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Constraint;
use crate::error::Result;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "dotver.toml";

/// Represents the complete configuration for dotver.
///
/// Holds the tag pattern used to pull versions out of tag names, a default
/// constraint for filtering, and output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(default)]
    pub constraint: Constraint,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default tag pattern, which takes the whole input as the version.
fn default_pattern() -> String {
    "{version}".to_string()
}

/// How versions are printed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The original input text
    #[default]
    Text,
    /// `major.minor.patch` plus extension
    Semantic,
    /// JSON array of strings
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print newest first
    #[serde(default)]
    pub reverse: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pattern: default_pattern(),
            constraint: Constraint::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Path of the config file `load_config` would read, if any.
fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("dotver").join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `dotver.toml` in current directory
/// 3. `dotver/dotver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let Some(path) = locate_config(config_path) else {
        log::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading config from {}", path.display());
    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
