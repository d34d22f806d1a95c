//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into raw mode on the alternate
//! screen and restores it when dropped, whether the app exits normally or
//! unwinds. The panic hook from [`setup_panic_hook`] covers the case where
//! the process aborts before the drop runs.
//!
//! ```no_run
//! use physioconnect::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> physioconnect::error::PhysioResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... run the app; the terminal is restored on drop
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{PhysioResult, UiError};

/// Restores the terminal on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear.
    pub fn new() -> PhysioResult<Self> {
        enable_raw_mode().map_err(UiError::init_failed)?;
        // From here on the guard undoes raw mode if anything below fails
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout).map_err(UiError::init_failed)?;

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).map_err(UiError::init_failed)?;
        terminal.clear().map_err(UiError::init_failed)?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Current size as `(columns, rows)`.
    pub fn size(&self) -> PhysioResult<(u16, u16)> {
        let size = self.terminal.size().map_err(UiError::init_failed)?;
        Ok((size.width, size.height))
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> PhysioResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor().map_err(UiError::restore_failed)?;
        Ok(())
    }
}
