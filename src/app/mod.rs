//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`ScreenId`] - Which screen is currently displayed
//! - [`Navigator`] - The single owner of the current screen and theme
//! - [`TimerEvent`] - What the app's one-shot timers mean
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;
mod navigation;
mod timers;
mod types;

pub use messages::AppMessage;
pub use navigation::Navigator;
pub use timers::TimerEvent;
pub use types::{NavigatorState, ScreenId, UnknownScreen};

use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::environment::{EnvironmentAdapter, HintStore};
use crate::scheduler::Scheduler;
use crate::screens::{self, ActiveScreen, Back, MountContext};
use crate::traits::ContentSource;

/// Main application state
pub struct App {
    /// Current screen and theme
    pub navigator: Navigator,
    /// View state of the mounted screen
    pub screen: ActiveScreen,
    /// One-shot timers on the app's virtual clock
    pub scheduler: Scheduler<TimerEvent>,
    /// Mirrors navigator state into presentation hints
    pub environment: EnvironmentAdapter,
    /// Hints read by the renderer
    pub hints: HintStore,
    /// Read-only sample data
    pub content: Box<dyn ContentSource>,
    pub config: AppConfig,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changed since the last draw
    pub needs_redraw: bool,
    /// Frame counter for animations
    pub tick_count: u64,
    /// Last known terminal size
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Sender for async messages
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("navigator", &self.navigator)
            .field("screen", &self.screen)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build the app, attach the environment adapter and mount the first
    /// screen.
    ///
    /// The app always starts on the splash. A configured start screen is
    /// entered right away, which cancels the splash countdown.
    pub fn new(config: AppConfig, content: Box<dyn ContentSource>) -> Self {
        let navigator = Navigator::new(config.start_dark);
        let mut scheduler = Scheduler::new();
        let mut hints = HintStore::new();
        let mut environment = EnvironmentAdapter::new(config.settle_delay);
        environment.attach(navigator.subscribe(), &mut hints);

        let screen = mount_screen(navigator.screen(), content.as_ref(), &mut scheduler, &config);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            navigator,
            screen,
            scheduler,
            environment,
            hints,
            content,
            config,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            message_tx,
            message_rx: Some(message_rx),
        };

        if let Some(start) = app.config.start_screen {
            app.navigate(start);
        }
        tracing::info!(
            screen = %app.current_screen(),
            dark = app.is_dark_mode(),
            "app started"
        );
        app
    }

    pub fn current_screen(&self) -> ScreenId {
        self.navigator.screen()
    }

    pub fn is_dark_mode(&self) -> bool {
        self.navigator.is_dark_mode()
    }

    pub fn content(&self) -> &dyn ContentSource {
        self.content.as_ref()
    }

    /// Switch screens.
    ///
    /// The old screen is torn down (its timers cancelled) and the new one
    /// mounted fresh. Navigating to the current screen keeps its state.
    pub fn navigate(&mut self, id: ScreenId) {
        if self.screen.id() == id {
            return;
        }
        self.screen.teardown(&mut self.scheduler);
        self.navigator.navigate(id);
        self.screen = mount_screen(id, self.content.as_ref(), &mut self.scheduler, &self.config);
        self.environment.sync(&mut self.hints);
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.navigator.toggle_theme();
        self.environment.sync(&mut self.hints);
        tracing::debug!(dark = self.is_dark_mode(), "theme toggled");
        self.mark_dirty();
    }

    /// Leave the splash now instead of waiting for the countdown.
    pub fn skip_splash(&mut self) {
        if self.current_screen() == ScreenId::Splash {
            self.navigate(ScreenId::Home);
        }
    }

    /// Step back within the screen, or leave it for home.
    pub fn go_back(&mut self) {
        match self.screen.back() {
            Back::Handled => self.mark_dirty(),
            Back::Leave if self.current_screen().is_feature() => self.navigate(ScreenId::Home),
            Back::Leave => {}
        }
    }

    /// Move the virtual clock to `now` and dispatch whatever came due.
    pub fn advance(&mut self, now: Duration) {
        for fired in self.scheduler.advance(now) {
            match fired.event {
                TimerEvent::SplashElapsed => {
                    let owned = matches!(
                        &self.screen,
                        ActiveScreen::Splash(splash) if splash.owns(fired.handle)
                    );
                    if owned {
                        self.navigate(ScreenId::Home);
                    } else {
                        tracing::warn!(handle = fired.handle.id(), "ignoring stale splash timer");
                    }
                }
                TimerEvent::AnalysisComplete => {
                    let completed = match &mut self.screen {
                        ActiveScreen::PostureIq(posture) => {
                            posture.complete_analysis(fired.handle, self.content.as_ref())
                        }
                        _ => {
                            tracing::warn!(handle = fired.handle.id(), "ignoring stale analysis timer");
                            false
                        }
                    };
                    if completed {
                        self.mark_dirty();
                    }
                }
                TimerEvent::OrientationSettled => {
                    if self.environment.on_settled(fired.handle, &mut self.hints) {
                        self.mark_dirty();
                    }
                }
            }
        }
    }

    /// Record a terminal resize and feed it to the orientation detector.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if self.environment.on_resize(width, height, &mut self.scheduler) {
            tracing::debug!(width, height, "orientation changed");
        }
        self.mark_dirty();
    }

    /// Consume a pending layout signal from the environment.
    pub fn take_layout_request(&mut self) -> bool {
        self.hints.take_layout_request()
    }

    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Navigate(id) => self.navigate(id),
            AppMessage::ToggleTheme => self.toggle_theme(),
            AppMessage::Quit => self.quit(),
        }
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.screen_animates() {
            self.mark_dirty();
        }
    }

    /// Screens that redraw every tick while visible.
    fn screen_animates(&self) -> bool {
        match &self.screen {
            ActiveScreen::Splash(_) => true,
            ActiveScreen::PostureIq(posture) => posture.is_analyzing(),
            _ => false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Tear down the screen and detach the environment adapter.
    pub fn shutdown(&mut self) {
        self.screen.teardown(&mut self.scheduler);
        self.environment.detach(&mut self.scheduler);
        tracing::info!(pending_timers = self.scheduler.pending_count(), "app shut down");
    }
}

fn mount_screen(
    id: ScreenId,
    content: &dyn ContentSource,
    scheduler: &mut Scheduler<TimerEvent>,
    config: &AppConfig,
) -> ActiveScreen {
    screens::mount(
        id,
        &mut MountContext {
            content,
            scheduler,
            config,
        },
    )
}
