//! Error types for PhysioConnect.
//!
//! The app has almost no failure surface at runtime: screens, routes and
//! view states are closed enums, and lookups that miss are silent no-ops.
//! What can fail is the edge of the process:
//!
//! | Source | Variant | Recoverable |
//! |--------|---------|-------------|
//! | Content file missing or unreadable | [`PhysioError::ContentIo`] | No |
//! | Content JSON malformed | [`PhysioError::ContentParse`] | No |
//! | Terminal setup, draw or restore | [`PhysioError::Ui`] | Depends |
//! | Log file cannot be opened | [`PhysioError::Logging`] | Yes (run without logs) |

mod ui;

pub use ui::UiError;

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type.
#[derive(Debug, Error)]
pub enum PhysioError {
    #[error("failed to read content from {path}: {source}")]
    ContentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content data ({origin}): {source}")]
    ContentParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Ui(#[from] UiError),
}

impl PhysioError {
    /// Whether the app can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PhysioError::ContentIo { .. } | PhysioError::ContentParse { .. } => false,
            PhysioError::Logging { .. } => true,
            PhysioError::Ui(e) => e.is_recoverable(),
        }
    }

    /// Short message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            PhysioError::ContentIo { path, .. } => {
                format!("Could not read content file {}.", path.display())
            }
            PhysioError::ContentParse { origin, .. } => {
                format!("The content in {} is not valid.", origin)
            }
            PhysioError::Logging { path, .. } => {
                format!("Logging disabled: cannot write to {}.", path.display())
            }
            PhysioError::Ui(e) => e.user_message(),
        }
    }
}

/// Result alias used across the crate.
pub type PhysioResult<T> = Result<T, PhysioError>;
