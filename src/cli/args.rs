//! Command-line argument parsing.

use crate::error::CliError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Dump the catalog as JSON
    Export,
    /// Print one post's full text
    Print(u32),
    /// Run the TUI application (default)
    RunTui,
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: contenthub [OPTIONS]

Browse the 30-day LinkedIn content calendar in the terminal.

Options:
  --print <ID>    Print the full text of post ID (caption, hashtags, CTA)
  --export        Print the whole catalog as JSON
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  CONTENTHUB_LOG       Log filter, e.g. contenthub=debug (default: info)
  CONTENTHUB_NO_MOUSE  Disable mouse capture
";

fn parse_post_id(value: &str) -> Result<u32, CliError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CliError::InvalidPostId {
            value: value.to_string(),
        })
}

/// Parse command-line arguments (program name first) into a command.
///
/// The first recognized flag wins; unknown arguments are ignored.
///
/// # Examples
///
/// ```
/// use contenthub::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["contenthub".to_string(), "--print".to_string(), "4".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Print(4));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--export" => return Ok(CliCommand::Export),
            "--print" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue {
                    flag: "--print".to_string(),
                })?;
                return parse_post_id(&value).map(CliCommand::Print);
            }
            other => {
                if let Some(value) = other.strip_prefix("--print=") {
                    return parse_post_id(value).map(CliCommand::Print);
                }
            }
        }
    }
    Ok(CliCommand::RunTui)
}
