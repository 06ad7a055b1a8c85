//! Command-line interface.
//!
//! Call [`run_cli_command`] early in `main()`, before the terminal is put into
//! TUI mode:
//!
//! ```
//! use trivia_tui::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(vec!["trivia-tui".to_string()].into_iter());
//! assert_eq!(command, CliCommand::RunTui);
//! assert!(!run_cli_command(&command));
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage, version_line, VERSION};

/// Print output for informational commands.
///
/// Returns `true` when the command was handled and the TUI should not start.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", usage());
            true
        }
        CliCommand::RunTui => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(!run_cli_command(&CliCommand::RunTui));
    }

    #[test]
    fn test_version_is_handled() {
        assert!(run_cli_command(&CliCommand::Version));
    }
}
