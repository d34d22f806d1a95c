//! Per-screen view-state machines.
//!
//! Every screen owns a small state enum describing which sub-view is shown.
//! The states are independent types with no shared base; [`ActiveScreen`]
//! is the tagged union the app holds for whichever screen is mounted.
//!
//! A screen lives from mount to teardown. Teardown cancels any timer the
//! screen armed, so a late completion can never land on a newer screen.

pub mod exercise_fit;
pub mod home;
pub mod journal_link;
pub mod near_therapy;
pub mod posture_iq;
pub mod profile;
pub mod registry;
pub mod splash;
pub mod tele_physio;

pub use exercise_fit::{ExerciseFitScreen, ExerciseView};
pub use home::HomeScreen;
pub use journal_link::{ArticleView, JournalLinkScreen};
pub use near_therapy::{LocatorView, NearTherapyScreen};
pub use posture_iq::{PostureIqScreen, PostureView};
pub use profile::{ProfileScreen, SettingsRow};
pub use registry::{mount, resolve, resolve_route, ScreenDescriptor, REGISTRY};
pub use splash::SplashScreen;
pub use tele_physio::{ChatView, TelePhysioScreen};

use crate::app::{ScreenId, TimerEvent};
use crate::config::AppConfig;
use crate::scheduler::Scheduler;
use crate::traits::ContentSource;

/// What a screen did with a "back" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Back {
    /// Moved to a parent sub-view; the screen stays mounted.
    Handled,
    /// Already at the root sub-view; the app should leave the screen.
    Leave,
}

/// Everything a screen may need while mounting.
pub struct MountContext<'a> {
    pub content: &'a dyn ContentSource,
    pub scheduler: &'a mut Scheduler<TimerEvent>,
    pub config: &'a AppConfig,
}

/// The mounted screen and its local state.
#[derive(Debug)]
pub enum ActiveScreen {
    Splash(SplashScreen),
    Home(HomeScreen),
    NearTherapy(NearTherapyScreen),
    ExerciseFit(ExerciseFitScreen),
    TelePhysio(TelePhysioScreen),
    JournalLink(JournalLinkScreen),
    PostureIq(PostureIqScreen),
    Profile(ProfileScreen),
}

impl ActiveScreen {
    pub fn id(&self) -> ScreenId {
        match self {
            ActiveScreen::Splash(_) => ScreenId::Splash,
            ActiveScreen::Home(_) => ScreenId::Home,
            ActiveScreen::NearTherapy(_) => ScreenId::NearTherapy,
            ActiveScreen::ExerciseFit(_) => ScreenId::ExerciseFit,
            ActiveScreen::TelePhysio(_) => ScreenId::TelePhysio,
            ActiveScreen::JournalLink(_) => ScreenId::JournalLink,
            ActiveScreen::PostureIq(_) => ScreenId::PostureIq,
            ActiveScreen::Profile(_) => ScreenId::Profile,
        }
    }

    /// Release anything the screen holds outside itself.
    pub fn teardown(&mut self, scheduler: &mut Scheduler<TimerEvent>) {
        match self {
            ActiveScreen::Splash(s) => s.teardown(scheduler),
            ActiveScreen::PostureIq(s) => s.teardown(scheduler),
            _ => {}
        }
    }

    /// Route "back" to the screen's own state machine.
    ///
    /// Splash and home have no parent sub-view.
    pub fn back(&mut self) -> Back {
        match self {
            ActiveScreen::Splash(_) | ActiveScreen::Home(_) => Back::Leave,
            ActiveScreen::NearTherapy(_) | ActiveScreen::Profile(_) => Back::Leave,
            ActiveScreen::ExerciseFit(s) => s.back(),
            ActiveScreen::TelePhysio(s) => s.back(),
            ActiveScreen::JournalLink(s) => s.back(),
            ActiveScreen::PostureIq(s) => s.back(),
        }
    }
}

/// Move a list cursor by `delta`, clamped to `[0, len)`.
pub(crate) fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, -1, 3), 0);
        assert_eq!(step_cursor(0, 1, 3), 1);
        assert_eq!(step_cursor(2, 1, 3), 2);
        assert_eq!(step_cursor(5, 0, 0), 0);
        assert_eq!(step_cursor(7, -1, 3), 2);
    }
}
