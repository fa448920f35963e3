//! CLI configuration loader and runtime defaults.

use crate::error::{CliError, CliResult};
use lib_assets::BlockExplorers;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI config filename under ~/.tally/
pub const DEFAULT_CONFIG_FILENAME: &str = "asset-warning.toml";

/// Environment variable that seeds the unverified-asset feature flag
pub const SUPPORT_UNVERIFIED_ASSET_ENV: &str = "SUPPORT_UNVERIFIED_ASSET";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default)]
    pub features: FeatureConfig,
    /// Explorer overrides, layered over the built-in networks
    pub explorers: Option<BlockExplorers>,
    pub defaults: Option<CliDefaults>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeatureConfig {
    #[serde(default = "default_support_unverified_asset")]
    pub support_unverified_asset: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            support_unverified_asset: default_support_unverified_asset(),
        }
    }
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliDefaults {
    pub snapshot: Option<String>,
    pub format: Option<String>,
}

fn default_support_unverified_asset() -> bool {
    std::env::var(SUPPORT_UNVERIFIED_ASSET_ENV)
        .ok()
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

/// Feature flag values as the extension build sets them ("true"/"1")
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

impl CliConfig {
    /// Built-in explorers with any configured overrides applied
    pub fn explorers(&self) -> BlockExplorers {
        let mut explorers = BlockExplorers::default();
        if let Some(overrides) = &self.explorers {
            explorers.extend(overrides);
        }
        explorers
    }

    pub fn default_snapshot(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.snapshot.as_deref())
    }

    pub fn default_format(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.format.as_deref())
    }
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".tally").join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./asset-warning.toml")
    }
}

/// Load the config file
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    parse_config_file(&config_path)
}

fn parse_config_file(path: &Path) -> CliResult<CliConfig> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::ConfigLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    toml::from_str(&raw).map_err(|e| CliError::ConfigLoadFailed {
        path: path.display().to_string(),
        reason: format!("Invalid CLI config: {}", e),
    })
}
