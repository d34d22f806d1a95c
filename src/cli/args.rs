//! Command-line argument parsing for PhysioConnect.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use crate::app::ScreenId;
use crate::config::AppConfig;

/// Options that shape a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Start in dark mode
    pub dark: bool,
    /// Content bundle to load instead of the embedded one
    pub content: Option<PathBuf>,
    /// Screen to open right after launch
    pub screen: Option<ScreenId>,
}

impl RunOptions {
    /// Layer these options over `config`. Flags win over the environment.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if self.dark {
            config.start_dark = true;
        }
        if let Some(path) = self.content {
            config.content_path = Some(path);
        }
        if let Some(screen) = self.screen {
            config.start_screen = Some(screen);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be parsed
    Invalid(String),
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win as soon as they are seen. Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use physioconnect::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["physioconnect".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--dark" => options.dark = true,
            "--content" => match args.next() {
                Some(path) => options.content = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--content needs a path".to_string()),
            },
            "--screen" => match args.next() {
                Some(route) => options.screen = Some(ScreenId::from_route(&route)),
                None => return CliCommand::Invalid("--screen needs a route".to_string()),
            },
            _ => {}
        }
    }
    CliCommand::RunTui(options)
}
