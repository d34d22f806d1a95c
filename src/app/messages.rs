//! AppMessage enum for async communication within the application.

use super::ScreenId;

/// Messages delivered to the main loop from outside the key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// Switch to a screen
    Navigate(ScreenId),
    /// Flip dark mode
    ToggleTheme,
    /// Leave the main loop (e.g. on SIGINT)
    Quit,
}
