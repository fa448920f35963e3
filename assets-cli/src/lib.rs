//! Asset Warning CLI Library
//!
//! Drives the unverified asset warning panel against a JSON wallet snapshot.
//!
//! ## Architecture
//!
//! Functional Core, Imperative Shell:
//!
//! - **Functional Core** (`lib-assets`): display mode, correlation, metadata decisions
//! - **Imperative Shell** (`commands/` module): snapshot I/O, console effects
//! - **Error Handling** (`error` module): Structured, domain-specific error types
//! - **Output Abstraction** (`output` module): Testable printing interface

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;
pub mod error;
pub mod host;
pub mod output;
pub mod snapshot;

pub use argument_parsing::{run_cli, AssetWarningCli, AssetWarningCommand};
pub use error::{CliError, CliResult};
pub use output::Output;
