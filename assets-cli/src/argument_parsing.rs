//! Asset Warning CLI
//!
//! Command-line interface that replays the unverified asset panel against a
//! wallet snapshot: inspect, follow the discovery transaction, or decide.

use crate::commands;
use crate::commands::CommandContext;
use crate::output::ConsoleOutput;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use lib_assets::PanelAction;

/// Asset Warning CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "asset-warning")]
pub struct AssetWarningCli {
    /// Wallet snapshot file (JSON)
    #[arg(short, long, env = "ASSET_WARNING_SNAPSHOT")]
    pub snapshot: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "ASSET_WARNING_VERBOSE")]
    pub verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, env = "ASSET_WARNING_FORMAT")]
    pub format: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "ASSET_WARNING_CONFIG")]
    pub config: Option<String>,

    /// Override the unverified-asset feature flag from config
    #[arg(long)]
    pub support_unverified_asset: Option<bool>,

    #[command(subcommand)]
    pub command: AssetWarningCommand,
}

/// Asset warning commands
#[derive(Subcommand, Debug, Clone)]
pub enum AssetWarningCommand {
    /// List wallet assets with their verification state
    List(ListArgs),

    /// Show the warning panel for an asset
    Show(AssetArgs),

    /// Follow the asset's discovery transaction
    Discovery(AssetArgs),

    /// Press a panel button
    Act(ActArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Include assets the user chose not to show
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AssetArgs {
    /// Asset symbol or contract address
    pub asset: String,
}

#[derive(Args, Debug, Clone)]
pub struct ActArgs {
    /// Asset symbol or contract address
    pub asset: String,

    /// Button to press
    #[arg(value_enum)]
    pub action: ActionArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    Close,
    DontShow,
    AddToAssetList,
}

impl From<ActionArg> for PanelAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Close => PanelAction::Close,
            ActionArg::DontShow => PanelAction::DontShow,
            ActionArg::AddToAssetList => PanelAction::AddToAssetList,
        }
    }
}

/// Install the tracing subscriber; `--verbose` forces debug level
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub async fn run_cli() -> Result<()> {
    let cli = AssetWarningCli::parse();
    init_tracing(cli.verbose);

    let config = crate::cli_config::load_config(cli.config.as_deref())?;
    let ctx = CommandContext::resolve(&cli, &config)?;
    let output = ConsoleOutput;

    let result = match &cli.command {
        AssetWarningCommand::List(args) => commands::list::handle_list_command(args.clone(), &ctx, &output).await,
        AssetWarningCommand::Show(args) => commands::panel::handle_show_command(args.clone(), &ctx, &output).await,
        AssetWarningCommand::Discovery(args) => commands::panel::handle_discovery_command(args.clone(), &ctx, &output).await,
        AssetWarningCommand::Act(args) => commands::panel::handle_act_command(args.clone(), &ctx, &output).await,
    };

    result.map_err(anyhow::Error::from)
}
