//! CLI module for buzzboard.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Plain-text snapshots of every screen
//!
//! # Usage
//!
//! ```ignore
//! use buzzboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config, &runtime) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod snapshot;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use snapshot::{handle_snapshot_command, render_snapshot};
pub use version::{handle_version_command, version_string, VERSION};

use color_eyre::Result;
use tokio::runtime::Runtime;

use crate::config::DashboardConfig;

/// Run a CLI command if applicable.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` never returns.
pub fn run_cli_command(
    command: CliCommand,
    config: &DashboardConfig,
    runtime: &Runtime,
) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Snapshot => Some(runtime.block_on(handle_snapshot_command(config))),
        CliCommand::RunTui => None,
    }
}
