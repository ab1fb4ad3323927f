//! CLI module.
//!
//! Flags are handled before any terminal setup:
//!
//! ```ignore
//! use contenthub::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod export;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use export::{export_catalog, print_post};
pub use version::{version_string, VERSION};

use std::sync::Arc;

use color_eyre::Result;

use crate::content::ContentStore;

fn builtin_store() -> Result<Arc<ContentStore>> {
    Ok(ContentStore::builtin()?)
}

/// Produce the stdout text for a non-TUI command.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn command_output(command: &CliCommand) -> Option<Result<String>> {
    let output = match command {
        CliCommand::RunTui => return None,
        CliCommand::Version => Ok(version_string()),
        CliCommand::Help => Ok(USAGE.trim_end().to_string()),
        CliCommand::Export => builtin_store().and_then(|store| Ok(export_catalog(&store)?)),
        CliCommand::Print(id) => builtin_store().and_then(|store| Ok(print_post(&store, *id)?)),
    };
    Some(output)
}

/// Run a CLI command and print its output.
///
/// * `None` - the command is `RunTui`, start the TUI
/// * `Some(Ok(()))` - the command ran and printed its output
/// * `Some(Err(e))` - the command failed
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    command_output(command).map(|output| {
        output.map(|text| {
            println!("{}", text);
        })
    })
}
