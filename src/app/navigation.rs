//! The navigator: current screen and theme.
//!
//! The navigator is a plain state container with exactly two mutating
//! operations. Observers subscribe to a `watch` channel rather than polling
//! the app, so presentation side effects stay out of the navigation path.

use tokio::sync::watch;

use super::types::{NavigatorState, ScreenId};

/// Single-owner holder of [`NavigatorState`].
#[derive(Debug)]
pub struct Navigator {
    state: NavigatorState,
    tx: watch::Sender<NavigatorState>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Navigator {
    /// Start on the splash screen with the given theme.
    pub fn new(is_dark_mode: bool) -> Self {
        let state = NavigatorState {
            current_screen: ScreenId::Splash,
            is_dark_mode,
        };
        let (tx, _rx) = watch::channel(state);
        Self { state, tx }
    }

    /// Switch the current screen.
    pub fn navigate(&mut self, screen: ScreenId) {
        tracing::debug!(from = %self.state.current_screen, to = %screen, "navigate");
        self.state.current_screen = screen;
        self.publish();
    }

    /// Flip between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.state.is_dark_mode = !self.state.is_dark_mode;
        tracing::debug!(dark = self.state.is_dark_mode, "toggle theme");
        self.publish();
    }

    /// `(current screen, is dark mode)`.
    pub fn current(&self) -> (ScreenId, bool) {
        (self.state.current_screen, self.state.is_dark_mode)
    }

    pub fn screen(&self) -> ScreenId {
        self.state.current_screen
    }

    pub fn is_dark_mode(&self) -> bool {
        self.state.is_dark_mode
    }

    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// Observe state changes. The receiver starts with the current state
    /// marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<NavigatorState> {
        self.tx.subscribe()
    }

    fn publish(&self) {
        // Fine with no receivers; the state is kept locally either way.
        self.tx.send_replace(self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), (ScreenId::Splash, false));

        let dark = Navigator::new(true);
        assert_eq!(dark.current(), (ScreenId::Splash, true));
    }

    #[test]
    fn test_navigate_sets_screen() {
        let mut nav = Navigator::default();
        nav.navigate(ScreenId::ExerciseFit);
        assert_eq!(nav.screen(), ScreenId::ExerciseFit);
        assert!(!nav.is_dark_mode());
    }

    #[test]
    fn test_toggle_theme_twice_restores() {
        let mut nav = Navigator::default();
        nav.toggle_theme();
        assert!(nav.is_dark_mode());
        nav.toggle_theme();
        assert!(!nav.is_dark_mode());
    }

    #[test]
    fn test_subscriber_sees_changes() {
        let mut nav = Navigator::default();
        let mut rx = nav.subscribe();
        assert!(!rx.has_changed().unwrap());

        nav.toggle_theme();
        assert!(rx.has_changed().unwrap());
        let seen = *rx.borrow_and_update();
        assert!(seen.is_dark_mode);
        assert_eq!(seen.current_screen, ScreenId::Splash);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_navigate_without_subscribers_does_not_fail() {
        let mut nav = Navigator::default();
        nav.navigate(ScreenId::Home);
        nav.navigate(ScreenId::Profile);
        assert_eq!(nav.screen(), ScreenId::Profile);
    }
}
