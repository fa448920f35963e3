//! Asset Warning Command-Line Interface
//!
//! Entry point for the asset-warning binary. Parses command-line arguments
//! and delegates to the appropriate command handler.

use assets_cli::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_cli().await
}
