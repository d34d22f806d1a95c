//! Splash screen and its auto-advance countdown.
//!
//! The countdown is armed every time the splash mounts, not once per
//! process: re-entering the splash restarts it.

use super::MountContext;
use crate::app::TimerEvent;
use crate::scheduler::{Scheduler, TimerHandle};

#[derive(Debug)]
pub struct SplashScreen {
    timer: Option<TimerHandle>,
}

impl SplashScreen {
    /// Mount and arm the countdown.
    pub fn mount(ctx: &mut MountContext<'_>) -> Self {
        let handle = ctx
            .scheduler
            .schedule(ctx.config.splash_delay, TimerEvent::SplashElapsed);
        tracing::debug!(
            handle = handle.id(),
            delay_ms = ctx.config.splash_delay.as_millis() as u64,
            "splash countdown armed"
        );
        Self {
            timer: Some(handle),
        }
    }

    /// Whether `handle` is this splash's live countdown.
    pub fn owns(&self, handle: TimerHandle) -> bool {
        self.timer == Some(handle)
    }

    pub fn countdown(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        if let Some(handle) = self.timer.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Content;
    use std::time::Duration;

    #[test]
    fn test_teardown_cancels_countdown() {
        let content = Content::embedded().unwrap();
        let config = AppConfig::default().with_splash_delay(Duration::from_millis(50));
        let mut scheduler = Scheduler::new();
        let mut splash = SplashScreen::mount(&mut MountContext {
            content: &content,
            scheduler: &mut scheduler,
            config: &config,
        });
        let handle = splash.countdown().unwrap();
        assert!(splash.owns(handle));

        splash.teardown(&mut scheduler);
        assert!(!splash.owns(handle));
        assert!(scheduler.advance(Duration::from_millis(100)).is_empty());
    }
}
