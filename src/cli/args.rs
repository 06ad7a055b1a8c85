//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments (program name first) into a command.
///
/// Unknown arguments are ignored.
///
/// ```
/// use trivia_tui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["trivia-tui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["trivia-tui", "--version"]), CliCommand::Version);
        assert_eq!(parse(&["trivia-tui", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["trivia-tui", "--help"]), CliCommand::Help);
        assert_eq!(parse(&["trivia-tui", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&["trivia-tui"]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["trivia-tui", "--unknown"]), CliCommand::RunTui);
    }

    #[test]
    fn test_first_recognized_flag_wins() {
        assert_eq!(parse(&["trivia-tui", "-h", "-V"]), CliCommand::Help);
    }
}
