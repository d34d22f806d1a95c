//! Screen registry: the fixed table from [`ScreenId`] to screen.
//!
//! The table is total over the enum, so [`resolve`] cannot fail. Route
//! strings coming from outside (CLI, content data) go through
//! [`resolve_route`], which falls back to home for anything unknown.

use super::{
    ActiveScreen, ExerciseFitScreen, HomeScreen, JournalLinkScreen, MountContext,
    NearTherapyScreen, PostureIqScreen, ProfileScreen, SplashScreen, TelePhysioScreen,
};
use crate::app::ScreenId;

/// Static metadata and constructor for one screen.
pub struct ScreenDescriptor {
    pub id: ScreenId,
    pub title: &'static str,
    pub subtitle: &'static str,
    mount: fn(&mut MountContext<'_>) -> ActiveScreen,
}

impl ScreenDescriptor {
    /// Build a fresh view state for this screen.
    pub fn mount(&self, ctx: &mut MountContext<'_>) -> ActiveScreen {
        tracing::debug!(screen = %self.id, "mount");
        (self.mount)(ctx)
    }
}

impl std::fmt::Debug for ScreenDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish()
    }
}

/// One entry per [`ScreenId`], in declaration order.
pub static REGISTRY: [ScreenDescriptor; 8] = [
    ScreenDescriptor {
        id: ScreenId::Splash,
        title: "PhysioConnect",
        subtitle: "Connect Your Home Care",
        mount: |ctx| ActiveScreen::Splash(SplashScreen::mount(ctx)),
    },
    ScreenDescriptor {
        id: ScreenId::Home,
        title: "PhysioConnect",
        subtitle: "Home",
        mount: |_| ActiveScreen::Home(HomeScreen::new()),
    },
    ScreenDescriptor {
        id: ScreenId::NearTherapy,
        title: "Near Therapy",
        subtitle: "Find Nearby Therapists",
        mount: |_| ActiveScreen::NearTherapy(NearTherapyScreen::new()),
    },
    ScreenDescriptor {
        id: ScreenId::ExerciseFit,
        title: "Exercise Fit",
        subtitle: "Start Exercise Session",
        mount: |_| ActiveScreen::ExerciseFit(ExerciseFitScreen::new()),
    },
    ScreenDescriptor {
        id: ScreenId::TelePhysio,
        title: "TelePhysio",
        subtitle: "Online Consultation",
        mount: |_| ActiveScreen::TelePhysio(TelePhysioScreen::new()),
    },
    ScreenDescriptor {
        id: ScreenId::JournalLink,
        title: "Journal Link",
        subtitle: "Access Journal",
        mount: |ctx| ActiveScreen::JournalLink(JournalLinkScreen::new(ctx.content)),
    },
    ScreenDescriptor {
        id: ScreenId::PostureIq,
        title: "Posture IQ",
        subtitle: "Analyze Posture",
        mount: |_| ActiveScreen::PostureIq(PostureIqScreen::new()),
    },
    ScreenDescriptor {
        id: ScreenId::Profile,
        title: "Profile",
        subtitle: "Account and Settings",
        mount: |_| ActiveScreen::Profile(ProfileScreen::new()),
    },
];

/// Look up the descriptor for a screen.
pub fn resolve(id: ScreenId) -> &'static ScreenDescriptor {
    REGISTRY
        .iter()
        .find(|d| d.id == id)
        .unwrap_or(&REGISTRY[1])
}

/// Mount a fresh view state for `id`.
pub fn mount(id: ScreenId, ctx: &mut MountContext<'_>) -> ActiveScreen {
    resolve(id).mount(ctx)
}

/// Look up by route name; unknown routes resolve to home.
pub fn resolve_route(route: &str) -> &'static ScreenDescriptor {
    resolve(ScreenId::from_route(route))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Content;
    use crate::scheduler::Scheduler;

    #[test]
    fn test_every_screen_resolves_to_itself() {
        for id in ScreenId::ALL {
            assert_eq!(resolve(id).id, id);
        }
    }

    #[test]
    fn test_registry_has_one_entry_per_screen() {
        assert_eq!(REGISTRY.len(), ScreenId::ALL.len());
        for (entry, id) in REGISTRY.iter().zip(ScreenId::ALL) {
            assert_eq!(entry.id, id);
        }
    }

    #[test]
    fn test_unknown_route_resolves_home() {
        assert_eq!(resolve_route("settings").id, ScreenId::Home);
        assert_eq!(resolve_route("").id, ScreenId::Home);
        assert_eq!(resolve_route("posture-iq").id, ScreenId::PostureIq);
    }

    #[test]
    fn test_mount_builds_matching_state() {
        let content = Content::embedded().unwrap();
        let config = AppConfig::default();
        let mut scheduler = Scheduler::new();

        for id in ScreenId::ALL {
            let mut ctx = MountContext {
                content: &content,
                scheduler: &mut scheduler,
                config: &config,
            };
            let screen = resolve(id).mount(&mut ctx);
            assert_eq!(screen.id(), id);
        }
    }

    #[test]
    fn test_mounting_splash_arms_one_timer() {
        let content = Content::embedded().unwrap();
        let config = AppConfig::default();
        let mut scheduler = Scheduler::new();
        let mut ctx = MountContext {
            content: &content,
            scheduler: &mut scheduler,
            config: &config,
        };
        resolve(ScreenId::Splash).mount(&mut ctx);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
