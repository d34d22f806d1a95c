//! Runtime configuration.
//!
//! Use the builder methods to customize timings and startup behavior.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use physioconnect::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_splash_delay(Duration::from_millis(500))
//!     .with_start_dark(true);
//! assert!(config.start_dark);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::app::ScreenId;

/// Splash auto-advance delay.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_millis(3000);
/// Simulated posture analysis duration.
pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(3000);
/// Quiet period after an orientation change before relayout.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(100);
/// Frame tick for the main loop.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

const ENV_SPLASH_MS: &str = "PHYSIO_SPLASH_MS";
const ENV_ANALYSIS_MS: &str = "PHYSIO_ANALYSIS_MS";
const ENV_SETTLE_MS: &str = "PHYSIO_SETTLE_MS";
const ENV_DARK: &str = "PHYSIO_DARK";
const ENV_CONTENT: &str = "PHYSIO_CONTENT";
const ENV_LOG_FILE: &str = "PHYSIO_LOG_FILE";

/// Configuration for a run of the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub splash_delay: Duration,
    pub analysis_delay: Duration,
    pub settle_delay: Duration,
    pub tick_rate: Duration,
    /// Start in dark mode
    pub start_dark: bool,
    /// Open this screen right after launch instead of waiting on the splash
    pub start_screen: Option<ScreenId>,
    /// Content bundle to load instead of the embedded one
    pub content_path: Option<PathBuf>,
    /// Where logs go; `None` uses the default location
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay: DEFAULT_SPLASH_DELAY,
            analysis_delay: DEFAULT_ANALYSIS_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
            tick_rate: DEFAULT_TICK_RATE,
            start_dark: false,
            start_screen: None,
            content_path: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_splash_delay(mut self, delay: Duration) -> Self {
        self.splash_delay = delay;
        self
    }

    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_tick_rate(mut self, tick: Duration) -> Self {
        self.tick_rate = tick;
        self
    }

    pub fn with_start_dark(mut self, dark: bool) -> Self {
        self.start_dark = dark;
        self
    }

    pub fn with_start_screen(mut self, screen: ScreenId) -> Self {
        self.start_screen = Some(screen);
        self
    }

    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by `PHYSIO_*` environment variables.
    ///
    /// Durations are whole milliseconds; unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(delay) = env_millis(ENV_SPLASH_MS) {
            config.splash_delay = delay;
        }
        if let Some(delay) = env_millis(ENV_ANALYSIS_MS) {
            config.analysis_delay = delay;
        }
        if let Some(delay) = env_millis(ENV_SETTLE_MS) {
            config.settle_delay = delay;
        }
        if let Ok(value) = std::env::var(ENV_DARK) {
            config.start_dark = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Ok(path) = std::env::var(ENV_CONTENT) {
            if !path.is_empty() {
                config.content_path = Some(PathBuf::from(path));
            }
        }
        if let Ok(path) = std::env::var(ENV_LOG_FILE) {
            if !path.is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }
        config
    }
}

fn env_millis(name: &str) -> Option<Duration> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "ignoring invalid duration");
            None
        }
    }
}
