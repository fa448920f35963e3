//! Asset listing command
//!
//! Shows the wallet's assets with their verification state. Assets the user
//! chose not to show are left out unless `--all` is given.

use lib_assets::{is_listed, listed_assets, resolve_display_mode, truncate_address, Asset};
use serde_json::{json, Value};

use crate::argument_parsing::ListArgs;
use crate::commands::{CommandContext, OutputFormat};
use crate::error::CliResult;
use crate::output::Output;
use crate::snapshot::read_snapshot;

/// Assets to show for the given flags
pub fn select_assets(assets: &[Asset], include_hidden: bool) -> Vec<&Asset> {
    if include_hidden {
        assets.iter().collect()
    } else {
        listed_assets(assets).collect()
    }
}

pub fn asset_row(asset: &Asset, feature_enabled: bool) -> Value {
    json!({
        "symbol": asset.symbol,
        "contract": asset.contract_address(),
        "displayMode": resolve_display_mode(asset.metadata.as_ref(), feature_enabled),
        "hidden": !is_listed(asset),
    })
}

pub async fn handle_list_command(
    args: ListArgs,
    ctx: &CommandContext,
    output: &dyn Output,
) -> CliResult<()> {
    let snapshot = read_snapshot(&ctx.snapshot_path).await?;
    let assets = select_assets(&snapshot.assets, args.all);

    match ctx.format {
        OutputFormat::Json => {
            let rows: Vec<Value> = assets
                .iter()
                .map(|asset| asset_row(asset, ctx.feature_enabled))
                .collect();
            output.print_json(&Value::Array(rows))?;
        }
        OutputFormat::Table => {
            output.header("Assets")?;
            for asset in assets {
                let mode = resolve_display_mode(asset.metadata.as_ref(), ctx.feature_enabled);
                let hidden = if is_listed(asset) { "" } else { " [hidden]" };
                output.print(&format!(
                    "{:<10} {:<14} {:?}{}",
                    asset.symbol,
                    truncate_address(asset.contract_address()),
                    mode,
                    hidden
                ))?;
            }
        }
    }

    Ok(())
}
