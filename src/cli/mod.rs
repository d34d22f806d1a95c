//! CLI module for PhysioConnect.
//!
//! The CLI dispatcher is called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use physioconnect::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - a CLI command printed its output
/// * `Some(Err(e))` - the arguments were invalid
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(Ok(()))
        }
        CliCommand::Help => {
            handle_help_command();
            Some(Ok(()))
        }
        CliCommand::Invalid(reason) => Some(Err(eyre!("{reason}\n\n{}", version::USAGE))),
        CliCommand::RunTui(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        let result = run_cli_command(&CliCommand::RunTui(RunOptions::default()));
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_is_error() {
        let result = run_cli_command(&CliCommand::Invalid("bad".to_string()));
        assert!(matches!(result, Some(Err(_))));
    }
}
