//! Command handlers
//!
//! Every handler takes a resolved [`CommandContext`] and an [`Output`] so the
//! shell can be exercised in tests without a terminal.
//!
//! [`Output`]: crate::output::Output

pub mod list;
pub mod panel;

use lib_assets::BlockExplorers;
use std::path::PathBuf;

use crate::argument_parsing::AssetWarningCli;
use crate::cli_config::CliConfig;
use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(CliError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Settings every command needs, after flags and config are merged
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub snapshot_path: PathBuf,
    pub format: OutputFormat,
    pub feature_enabled: bool,
    pub explorers: BlockExplorers,
}

impl CommandContext {
    /// Command-line flags win over config values
    pub fn resolve(cli: &AssetWarningCli, config: &CliConfig) -> CliResult<Self> {
        let snapshot_path = cli
            .snapshot
            .as_deref()
            .or(config.default_snapshot())
            .map(PathBuf::from)
            .ok_or(CliError::SnapshotMissing)?;

        let format = cli
            .format
            .as_deref()
            .or(config.default_format())
            .unwrap_or("table")
            .parse::<OutputFormat>()?;

        let feature_enabled = cli
            .support_unverified_asset
            .unwrap_or(config.features.support_unverified_asset);

        Ok(Self {
            snapshot_path,
            format,
            feature_enabled,
            explorers: config.explorers(),
        })
    }
}
