//! Environment adapter: navigator state to presentation hints.
//!
//! The adapter subscribes to the navigator once at startup and detaches at
//! shutdown. Between those points it:
//!
//! - registers the viewport hint exactly once,
//! - keeps the web-app hints present,
//! - mirrors dark mode into the dark flag, the theme color and the status
//!   bar style,
//! - turns bursts of orientation changes into a single layout request after
//!   a settle delay.
//!
//! ```text
//! Navigator --watch--> EnvironmentAdapter --PresentationHost--> HintStore --> ui
//!                              ^
//!        resize events --------+ (settle timer via Scheduler)
//! ```

mod hints;
mod orientation;

pub use hints::HintStore;
pub use orientation::Orientation;

use std::time::Duration;

use tokio::sync::watch;

use crate::app::{NavigatorState, TimerEvent};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::traits::PresentationHost;

/// Hint names.
pub mod hint {
    pub const VIEWPORT: &str = "viewport";
    pub const THEME_COLOR: &str = "theme-color";
    pub const APP_CAPABLE: &str = "apple-mobile-web-app-capable";
    pub const STATUS_BAR_STYLE: &str = "apple-mobile-web-app-status-bar-style";
}

/// Non-scalable, edge-to-edge viewport.
pub const VIEWPORT_CONTENT: &str =
    "width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no, viewport-fit=cover";

/// Dark slate.
pub const THEME_COLOR_DARK: &str = "#0f172a";
pub const THEME_COLOR_LIGHT: &str = "#ffffff";

pub const STATUS_BAR_DARK: &str = "black-translucent";
pub const STATUS_BAR_LIGHT: &str = "default";

pub fn theme_color(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        THEME_COLOR_DARK
    } else {
        THEME_COLOR_LIGHT
    }
}

pub fn status_bar_style(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        STATUS_BAR_DARK
    } else {
        STATUS_BAR_LIGHT
    }
}

/// Synchronizes [`NavigatorState`] into a [`PresentationHost`].
#[derive(Debug)]
pub struct EnvironmentAdapter {
    rx: Option<watch::Receiver<NavigatorState>>,
    applied_dark: Option<bool>,
    settle_delay: Duration,
    settle_timer: Option<TimerHandle>,
    orientation: Option<Orientation>,
}

impl EnvironmentAdapter {
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            rx: None,
            applied_dark: None,
            settle_delay,
            settle_timer: None,
            orientation: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.rx.is_some()
    }

    /// Subscribe and run the mount effects against the current state.
    ///
    /// Attaching twice keeps the first subscription.
    pub fn attach(
        &mut self,
        rx: watch::Receiver<NavigatorState>,
        host: &mut dyn PresentationHost,
    ) {
        if self.is_attached() {
            tracing::warn!("environment adapter already attached");
            return;
        }
        let mut rx = rx;
        let state = *rx.borrow_and_update();
        self.rx = Some(rx);

        ensure_viewport(host);
        self.apply_theme(state.is_dark_mode, host);
        tracing::debug!(dark = state.is_dark_mode, "environment adapter attached");
    }

    /// Drop the subscription and forget any pending settle timer.
    pub fn detach(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let Some(handle) = self.settle_timer.take() {
            scheduler.cancel(handle);
        }
        self.rx = None;
        self.applied_dark = None;
    }

    /// Apply any navigator change published since the last call.
    ///
    /// Returns `true` when hints were rewritten.
    pub fn sync(&mut self, host: &mut dyn PresentationHost) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return false;
        };
        match rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return false,
            Err(_) => {
                tracing::warn!("navigator dropped; detaching environment adapter");
                self.rx = None;
                return false;
            }
        }
        let state = *rx.borrow_and_update();
        if self.applied_dark == Some(state.is_dark_mode) {
            return false;
        }
        self.apply_theme(state.is_dark_mode, host);
        true
    }

    fn apply_theme(&mut self, is_dark_mode: bool, host: &mut dyn PresentationHost) {
        host.set_dark_class(is_dark_mode);
        host.set_hint(hint::THEME_COLOR, theme_color(is_dark_mode));
        ensure_web_app_hints(is_dark_mode, host);
        self.applied_dark = Some(is_dark_mode);
    }

    /// Feed a surface size. An aspect flip counts as an orientation change.
    ///
    /// The first size only records the starting orientation.
    pub fn on_resize(
        &mut self,
        width: u16,
        height: u16,
        scheduler: &mut Scheduler<TimerEvent>,
    ) -> bool {
        let next = Orientation::from_size(width, height);
        match self.orientation.replace(next) {
            Some(prev) if prev != next => {
                self.on_orientation_change(scheduler);
                true
            }
            _ => false,
        }
    }

    /// Restart the settle window. Only the last change in a burst survives.
    pub fn on_orientation_change(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let Some(previous) = self.settle_timer.take() {
            scheduler.cancel(previous);
        }
        let handle = scheduler.schedule(self.settle_delay, TimerEvent::OrientationSettled);
        self.settle_timer = Some(handle);
    }

    /// Handle a fired settle timer. Stale handles are ignored.
    pub fn on_settled(&mut self, handle: TimerHandle, host: &mut dyn PresentationHost) -> bool {
        if self.settle_timer != Some(handle) {
            tracing::debug!(handle = handle.id(), "ignoring stale settle timer");
            return false;
        }
        self.settle_timer = None;
        host.request_layout();
        true
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn settle_pending(&self) -> bool {
        self.settle_timer.is_some()
    }
}

fn ensure_viewport(host: &mut dyn PresentationHost) {
    if !host.has_hint(hint::VIEWPORT) {
        host.set_hint(hint::VIEWPORT, VIEWPORT_CONTENT);
    }
}

fn ensure_web_app_hints(is_dark_mode: bool, host: &mut dyn PresentationHost) {
    if !host.has_hint(hint::APP_CAPABLE) {
        host.set_hint(hint::APP_CAPABLE, "yes");
    }
    host.set_hint(hint::STATUS_BAR_STYLE, status_bar_style(is_dark_mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Navigator;

    const SETTLE: Duration = Duration::from_millis(100);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn attached(nav: &Navigator) -> (EnvironmentAdapter, HintStore) {
        let mut host = HintStore::new();
        let mut env = EnvironmentAdapter::new(SETTLE);
        env.attach(nav.subscribe(), &mut host);
        (env, host)
    }

    /// Feed orientation events at the given times, then let everything settle.
    fn layout_signals_for(times_ms: &[u64]) -> u64 {
        let nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);
        let mut scheduler = Scheduler::new();

        let mut drain = |scheduler: &mut Scheduler<TimerEvent>, env: &mut EnvironmentAdapter, now| {
            for fired in scheduler.advance(now) {
                if fired.event == TimerEvent::OrientationSettled {
                    env.on_settled(fired.handle, &mut host);
                }
            }
        };

        for &t in times_ms {
            drain(&mut scheduler, &mut env, ms(t));
            env.on_orientation_change(&mut scheduler);
        }
        let end = times_ms.last().copied().unwrap_or(0) + 1_000;
        drain(&mut scheduler, &mut env, ms(end));
        host.layout_requests()
    }

    #[test]
    fn test_mount_registers_hints() {
        let nav = Navigator::default();
        let (_env, host) = attached(&nav);

        assert_eq!(host.hint(hint::VIEWPORT), Some(VIEWPORT_CONTENT));
        assert_eq!(host.hint(hint::THEME_COLOR), Some(THEME_COLOR_LIGHT));
        assert_eq!(host.hint(hint::APP_CAPABLE), Some("yes"));
        assert_eq!(host.hint(hint::STATUS_BAR_STYLE), Some(STATUS_BAR_LIGHT));
        assert!(!host.is_dark());
    }

    #[test]
    fn test_mount_in_dark_mode() {
        let nav = Navigator::new(true);
        let (_env, host) = attached(&nav);
        assert!(host.is_dark());
        assert_eq!(host.hint(hint::THEME_COLOR), Some(THEME_COLOR_DARK));
        assert_eq!(host.hint(hint::STATUS_BAR_STYLE), Some(STATUS_BAR_DARK));
    }

    #[test]
    fn test_theme_toggle_updates_hints() {
        let mut nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);

        nav.toggle_theme();
        assert!(env.sync(&mut host));
        assert!(host.is_dark());
        assert_eq!(host.hint(hint::THEME_COLOR), Some("#0f172a"));
        assert_eq!(host.hint(hint::STATUS_BAR_STYLE), Some("black-translucent"));

        nav.toggle_theme();
        assert!(env.sync(&mut host));
        assert!(!host.is_dark());
        assert_eq!(host.hint(hint::THEME_COLOR), Some("#ffffff"));
        assert_eq!(host.hint(hint::STATUS_BAR_STYLE), Some("default"));
    }

    #[test]
    fn test_theme_color_mapping_is_deterministic() {
        for dark in [false, true, false, true] {
            let expected = if dark { "#0f172a" } else { "#ffffff" };
            assert_eq!(theme_color(dark), expected);
        }
    }

    #[test]
    fn test_viewport_registered_once() {
        let mut nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);

        for _ in 0..4 {
            nav.toggle_theme();
            env.sync(&mut host);
        }
        nav.navigate(crate::app::ScreenId::Home);
        env.sync(&mut host);

        assert_eq!(host.write_count(hint::VIEWPORT), 1);
        assert_eq!(host.write_count(hint::APP_CAPABLE), 1);
    }

    #[test]
    fn test_navigation_alone_does_not_rewrite_theme() {
        let mut nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);
        let before = host.write_count(hint::THEME_COLOR);

        nav.navigate(crate::app::ScreenId::Profile);
        assert!(!env.sync(&mut host));
        assert_eq!(host.write_count(hint::THEME_COLOR), before);
    }

    #[test]
    fn test_sync_after_detach_is_noop() {
        let mut nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);
        let mut scheduler = Scheduler::new();
        env.detach(&mut scheduler);

        nav.toggle_theme();
        assert!(!env.sync(&mut host));
        assert!(!host.is_dark());
    }

    #[test]
    fn test_single_orientation_change_emits_after_settle() {
        let nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);
        let mut scheduler = Scheduler::new();

        env.on_orientation_change(&mut scheduler);
        assert!(scheduler.advance(ms(99)).is_empty());
        let fired = scheduler.advance(ms(100));
        assert_eq!(fired.len(), 1);
        assert!(env.on_settled(fired[0].handle, &mut host));
        assert_eq!(host.layout_requests(), 1);
    }

    #[test]
    fn test_orientation_storm_coalesces() {
        // Five events inside 50ms
        let storm = layout_signals_for(&[0, 10, 20, 30, 40]);
        // Five events spaced past the settle window
        let spaced = layout_signals_for(&[0, 150, 300, 450, 600]);

        assert_eq!(storm, 1);
        assert_eq!(spaced, 5);
        assert!(storm <= spaced);
    }

    #[test]
    fn test_stale_settle_handle_ignored() {
        let nav = Navigator::default();
        let (mut env, mut host) = attached(&nav);
        let mut scheduler = Scheduler::new();

        env.on_orientation_change(&mut scheduler);
        let first = scheduler.advance(ms(0));
        assert!(first.is_empty());
        env.on_orientation_change(&mut scheduler);

        // A handle that is not the live one
        let bogus = scheduler.schedule(ms(0), TimerEvent::OrientationSettled);
        assert!(!env.on_settled(bogus, &mut host));
        assert_eq!(host.layout_requests(), 0);
    }

    #[test]
    fn test_resize_detects_orientation_flip() {
        let mut env = EnvironmentAdapter::new(SETTLE);
        let mut scheduler = Scheduler::new();

        // First size only records the orientation
        assert!(!env.on_resize(120, 40, &mut scheduler));
        assert_eq!(env.orientation(), Some(Orientation::Landscape));
        // Same aspect, different size
        assert!(!env.on_resize(100, 30, &mut scheduler));
        assert!(!env.settle_pending());
        // Flip
        assert!(env.on_resize(40, 50, &mut scheduler));
        assert_eq!(env.orientation(), Some(Orientation::Portrait));
        assert!(env.settle_pending());
    }

    #[test]
    fn test_detach_cancels_settle_timer() {
        let nav = Navigator::default();
        let (mut env, _host) = attached(&nav);
        let mut scheduler = Scheduler::new();

        env.on_orientation_change(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 1);
        env.detach(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);
    }
}
