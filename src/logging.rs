//! Logging through `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the UI, so log lines always go to a file. The
//! filter comes from `PHYSIO_LOG` (standard `EnvFilter` directives) and
//! defaults to `info`.
//!
//! # Log Levels
//!
//! - `info`: startup and shutdown
//! - `debug`: navigation, mounts, view transitions, timer arming
//! - `warn`: ignored stale timer events, bad config values

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{PhysioError, PhysioResult};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "PHYSIO_LOG";

/// Filter used when `PHYSIO_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

const LOG_FILE_NAME: &str = "physioconnect.log";

/// Default log location: `<data dir>/physioconnect/physioconnect.log`.
///
/// Falls back to the temp dir on platforms without a data dir.
pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("physioconnect")
        .join(LOG_FILE_NAME)
}

/// Build the filter from `PHYSIO_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path` (or the default path).
///
/// Returns the path actually used. Calling this twice leaves the first
/// subscriber in place.
pub fn init_logging(path: Option<&Path>) -> PhysioResult<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(build_env_filter())
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already set");
    }
    Ok(path)
}

fn open_log_file(path: &Path) -> PhysioResult<fs::File> {
    let to_error = |source| PhysioError::Logging {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(to_error)
}
