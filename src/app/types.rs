//! Type definitions for application state.
//!
//! - [`ScreenId`] - Which top-level screen is displayed
//! - [`NavigatorState`] - Snapshot published by the navigator

use std::fmt;
use std::str::FromStr;

/// Top-level navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Splash,
    Home,
    NearTherapy,
    ExerciseFit,
    TelePhysio,
    JournalLink,
    PostureIq,
    Profile,
}

impl ScreenId {
    pub const ALL: [ScreenId; 8] = [
        ScreenId::Splash,
        ScreenId::Home,
        ScreenId::NearTherapy,
        ScreenId::ExerciseFit,
        ScreenId::TelePhysio,
        ScreenId::JournalLink,
        ScreenId::PostureIq,
        ScreenId::Profile,
    ];

    /// Route name, e.g. `"near-therapy"`.
    pub fn route(&self) -> &'static str {
        match self {
            ScreenId::Splash => "splash",
            ScreenId::Home => "home",
            ScreenId::NearTherapy => "near-therapy",
            ScreenId::ExerciseFit => "exercise-fit",
            ScreenId::TelePhysio => "tele-physio",
            ScreenId::JournalLink => "journal-link",
            ScreenId::PostureIq => "posture-iq",
            ScreenId::Profile => "profile",
        }
    }

    /// Lenient lookup: unknown routes fall back to [`ScreenId::Home`].
    pub fn from_route(route: &str) -> ScreenId {
        route.parse().unwrap_or(ScreenId::Home)
    }

    /// Feature screens are everything reachable from the dashboard that
    /// returns to it on "back".
    pub fn is_feature(&self) -> bool {
        !matches!(self, ScreenId::Splash | ScreenId::Home)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Returned by the strict [`FromStr`] impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown screen: {}", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|id| id.route() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// Current screen and theme, as published by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub current_screen: ScreenId,
    pub is_dark_mode: bool,
}
