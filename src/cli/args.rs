//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Fetch once and print every screen as plain text
    Snapshot,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the command to execute.
///
/// The first argument (the program name) is skipped, unknown arguments are
/// ignored and the first recognised flag wins.
///
/// ```
/// use buzzboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["buzzboard".to_string(), "--snapshot".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Snapshot);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--snapshot" => return CliCommand::Snapshot,
            _ => {}
        }
    }
    CliCommand::RunTui
}
