//! Warning panel commands
//!
//! Architecture: Functional Core, Imperative Shell (FCIS)
//!
//! - **Pure Logic**: panel report construction and table rendering
//! - **Imperative Shell**: snapshot reads, metadata writes, console effects

use lib_assets::{
    ActionOutcome, AssetWarning, BannerDescription, BannerTitle, DiscoveryOutcome, PanelAction,
    VerificationDisplayMode,
};
use serde_json::{json, Value};

use crate::argument_parsing::{ActArgs, AssetArgs};
use crate::commands::{CommandContext, OutputFormat};
use crate::error::CliResult;
use crate::host::ConsoleHost;
use crate::output::Output;
use crate::snapshot::{read_snapshot, FileSnapshotStore};

// ============================================================================
// PURE LOGIC - No side effects, fully testable
// ============================================================================

/// Structured view of the panel, used for both output formats
pub fn panel_report(panel: &AssetWarning<'_>) -> CliResult<Value> {
    Ok(json!({
        "asset": panel.asset().key().to_string(),
        "displayMode": panel.display_mode(),
        "banner": panel.banner(),
        "details": serde_json::to_value(panel.details())?,
        "actions": panel.actions(),
    }))
}

fn banner_title(title: BannerTitle) -> &'static str {
    match title {
        BannerTitle::Verified => "Verified asset",
        BannerTitle::Unverified => "Unverified asset",
    }
}

fn banner_description(description: BannerDescription) -> &'static str {
    match description {
        BannerDescription::Current => {
            "This asset is not on any curated token list. Add it to your asset list only if you trust it."
        }
        BannerDescription::Legacy => {
            "This asset was imported automatically. Verify the contract before interacting with it."
        }
    }
}

fn action_label(action: PanelAction) -> &'static str {
    match action {
        PanelAction::Close => "close",
        PanelAction::DontShow => "dont-show",
        PanelAction::AddToAssetList => "add-to-asset-list",
    }
}

/// Human-readable panel
pub fn render_panel_table(panel: &AssetWarning<'_>) -> Vec<String> {
    let banner = panel.banner();
    let details = panel.details();

    let mut lines = vec![
        banner_title(banner.title).to_string(),
        banner_description(banner.description).to_string(),
        String::new(),
        format!("{:<20} {}", "Symbol", details.symbol),
    ];

    match &details.contract_link {
        Some(link) => lines.push(format!("{:<20} {} ({})", "Contract", details.contract_display, link)),
        None => lines.push(format!("{:<20} {}", "Contract", details.contract_display)),
    }

    if let Some(row) = &details.discovery {
        let hint = if row.correlation.is_matched() {
            "in recent activity"
        } else {
            "not in loaded activity"
        };
        lines.push(format!("{:<20} {} ({})", "Discovery tx", row.display, hint));
    }

    let actions: Vec<&str> = panel.actions().into_iter().map(action_label).collect();
    lines.push(String::new());
    lines.push(format!("{:<20} {}", "Actions", actions.join(", ")));
    lines
}

fn mode_label(mode: VerificationDisplayMode) -> &'static str {
    match mode {
        VerificationDisplayMode::Verified => "verified",
        VerificationDisplayMode::Unverified => "unverified",
        VerificationDisplayMode::LegacyUnsupported => "legacy",
    }
}

// ============================================================================
// IMPERATIVE SHELL - All side effects here
// ============================================================================

pub async fn handle_show_command(
    args: AssetArgs,
    ctx: &CommandContext,
    output: &dyn Output,
) -> CliResult<()> {
    let snapshot = read_snapshot(&ctx.snapshot_path).await?;
    let asset = snapshot.find_asset(&args.asset)?;
    let panel = AssetWarning::new(
        asset,
        &snapshot.activities,
        snapshot.network.as_ref(),
        &ctx.explorers,
        ctx.feature_enabled,
    );

    match ctx.format {
        OutputFormat::Json => output.print_json(&panel_report(&panel)?)?,
        OutputFormat::Table => output.print_panel("Asset imported", &render_panel_table(&panel))?,
    }

    Ok(())
}

pub async fn handle_discovery_command(
    args: AssetArgs,
    ctx: &CommandContext,
    output: &dyn Output,
) -> CliResult<()> {
    let snapshot = read_snapshot(&ctx.snapshot_path).await?;
    let asset = snapshot.find_asset(&args.asset)?;
    let panel = AssetWarning::new(
        asset,
        &snapshot.activities,
        snapshot.network.as_ref(),
        &ctx.explorers,
        ctx.feature_enabled,
    );
    let host = ConsoleHost::new(output);

    if panel.open_discovery(&host)? == DiscoveryOutcome::Absent {
        output.info(&format!("{} has no discovery transaction", asset.symbol))?;
    }

    Ok(())
}

pub async fn handle_act_command(
    args: ActArgs,
    ctx: &CommandContext,
    output: &dyn Output,
) -> CliResult<()> {
    let snapshot = read_snapshot(&ctx.snapshot_path).await?;
    let asset = snapshot.find_asset(&args.asset)?;
    let panel = AssetWarning::new(
        asset,
        &snapshot.activities,
        snapshot.network.as_ref(),
        &ctx.explorers,
        ctx.feature_enabled,
    );
    let store = FileSnapshotStore::new(&ctx.snapshot_path);
    let host = ConsoleHost::new(output);

    match panel.perform(args.action.into(), &store, &host).await? {
        ActionOutcome::Dismissed => {
            output.info(&format!(
                "Panel closed ({} mode), metadata unchanged",
                mode_label(panel.display_mode())
            ))?;
        }
        ActionOutcome::Updated(metadata) => {
            if ctx.format == OutputFormat::Json {
                output.print_json(&serde_json::to_value(&metadata)?)?;
            }
        }
    }

    Ok(())
}
