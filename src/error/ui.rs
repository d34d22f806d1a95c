//! Terminal UI errors.

use thiserror::Error;

/// Errors raised while driving the terminal.
#[derive(Debug, Clone, Error)]
pub enum UiError {
    #[error("terminal initialization failed: {message}")]
    TerminalInitFailed { message: String },

    #[error("terminal restore failed: {message}")]
    TerminalRestoreFailed { message: String },

    #[error("failed to render {component}: {message}")]
    RenderFailed { component: String, message: String },
}

impl UiError {
    /// Check if the UI can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            UiError::TerminalInitFailed { .. } | UiError::TerminalRestoreFailed { .. }
        )
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            UiError::TerminalInitFailed { .. } => {
                "Failed to initialize the terminal. Please check your terminal settings.".to_string()
            }
            UiError::TerminalRestoreFailed { .. } => {
                "Failed to restore terminal. You may need to run `reset`.".to_string()
            }
            UiError::RenderFailed { component, .. } => {
                format!("Failed to draw the {} screen.", component)
            }
        }
    }

    pub fn init_failed(err: impl std::fmt::Display) -> Self {
        UiError::TerminalInitFailed {
            message: err.to_string(),
        }
    }

    pub fn restore_failed(err: impl std::fmt::Display) -> Self {
        UiError::TerminalRestoreFailed {
            message: err.to_string(),
        }
    }
}
