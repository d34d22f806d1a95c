//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: physioconnect [OPTIONS]

Options:
  --dark              Start in dark mode
  --content <PATH>    Load sample content from a JSON file
  --screen <ROUTE>    Open a screen at launch (near-therapy, exercise-fit,
                      tele-physio, journal-link, posture-iq, profile, home)
  -V, --version       Print version
  -h, --help          Print this help

Environment:
  PHYSIO_LOG          Log filter (default: info)
  PHYSIO_LOG_FILE     Log file path
  PHYSIO_SPLASH_MS, PHYSIO_ANALYSIS_MS, PHYSIO_SETTLE_MS
                      Timer overrides in milliseconds";

pub fn version_line() -> String {
    format!("physioconnect {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}

pub fn handle_help_command() {
    println!("{}\n\n{}", version_line(), USAGE);
}
