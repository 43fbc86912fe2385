use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{BranchPolicy, DEFAULT_MARKER};
use crate::error::{BuildVerError, Result};
use crate::git::DEFAULT_ABBREV;

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "buildver.toml";

fn default_remote() -> String {
    "origin".to_string()
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

fn default_abbrev() -> u32 {
    DEFAULT_ABBREV
}

/// Represents the complete configuration for buildver.
///
/// Every key is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Remote whose branches are used as reference tips
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Character marking tags of the unstable/master lineage
    #[serde(default = "default_marker")]
    pub marker: char,

    /// Number of hex digits in abbreviated hashes
    #[serde(default = "default_abbrev")]
    pub abbrev: u32,

    #[serde(default)]
    pub policy: BranchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: default_remote(),
            marker: default_marker(),
            abbrev: default_abbrev(),
            policy: BranchPolicy::default(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BuildVerError::config(e.to_string()))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildver.toml` in current directory
/// 3. `buildver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Config::default());
            }
        },
    };

    log::debug!("loading configuration from {}", path.display());
    let text = fs::read_to_string(&path)
        .map_err(|e| BuildVerError::config(format!("cannot read {}: {}", path.display(), e)))?;

    toml::from_str(&text)
        .map_err(|e| BuildVerError::config(format!("{}: {}", path.display(), e)))
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.marker, 'M');
        assert_eq!(config.abbrev, 7);
        assert_eq!(config.policy, BranchPolicy::marker());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_policy_table_keeps_defaults() {
        let config = Config::from_toml(
            r#"
[policy]
kind = "marker"
marked_branch = "develop"
"#,
        )
        .unwrap();

        assert_eq!(
            config.policy,
            BranchPolicy::Marker {
                marked_branch: "develop".to_string(),
                unmarked_branch: "stable".to_string(),
            }
        );
    }

    #[test]
    fn test_multi_character_marker_rejected() {
        let err = Config::from_toml(r#"marker = "MM""#).unwrap_err();
        assert!(matches!(err, BuildVerError::Config(_)));
    }

    #[test]
    fn test_unknown_policy_kind_rejected() {
        let err = Config::from_toml("[policy]\nkind = \"newest\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
