//! UI rendering.
//!
//! [`render`] draws the header, the mounted screen and a key-hint footer.
//! Colors come from the presentation hints through [`Palette`], sizes from
//! [`LayoutContext`]. Every screen renders from its view state alone; a
//! detail view whose record is missing draws nothing in its body.

mod exercise_fit;
mod helpers;
mod home;
mod journal_link;
mod layout;
mod near_therapy;
mod posture_iq;
mod profile;
mod splash;
mod tele_physio;
mod theme;

pub use helpers::{progress_bar, stars, truncate_string};
pub use layout::{breakpoints, DeviceClass, LayoutContext};
pub use theme::{parse_hex_color, Palette, DARK, LIGHT};

use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::screens::{self, ActiveScreen};
use crate::traits::ContentSource;

/// Everything a screen renderer reads besides its own view state.
pub struct RenderContext<'a> {
    pub content: &'a dyn ContentSource,
    pub palette: Palette,
    pub layout: LayoutContext,
    pub tick: u64,
    pub is_dark_mode: bool,
}

/// Render the UI for the mounted screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::from_hints(&app.hints);
    let layout = LayoutContext::from_rect(area);
    let ctx = RenderContext {
        content: app.content(),
        palette,
        layout,
        tick: app.tick_count,
        is_dark_mode: app.is_dark_mode(),
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    if let ActiveScreen::Splash(_) = &app.screen {
        splash::render_splash(frame, area, &ctx);
        return;
    }

    let (header, body, footer) = layout.chrome(area);
    let descriptor = screens::resolve(app.screen.id());
    helpers::render_header(
        frame,
        header,
        descriptor.title,
        descriptor.subtitle,
        &app.hints,
        &palette,
    );

    let keys = match &app.screen {
        ActiveScreen::Splash(_) => Vec::new(),
        ActiveScreen::Home(screen) => home::render_home(frame, body, screen, &ctx),
        ActiveScreen::NearTherapy(screen) => {
            near_therapy::render_near_therapy(frame, body, screen, &ctx)
        }
        ActiveScreen::ExerciseFit(screen) => {
            exercise_fit::render_exercise_fit(frame, body, screen, &ctx)
        }
        ActiveScreen::TelePhysio(screen) => {
            tele_physio::render_tele_physio(frame, body, screen, &ctx)
        }
        ActiveScreen::JournalLink(screen) => {
            journal_link::render_journal_link(frame, body, screen, &ctx)
        }
        ActiveScreen::PostureIq(screen) => posture_iq::render_posture_iq(frame, body, screen, &ctx),
        ActiveScreen::Profile(screen) => profile::render_profile(frame, body, screen, &ctx),
    };
    helpers::render_footer(frame, footer, &keys, &palette);
}

type KeyHints = Vec<(&'static str, &'static str)>;

/// Key hints shared by every screen outside text input.
const GLOBAL_KEYS: [(&str, &str); 2] = [("d", "Theme"), ("q", "Quit")];

/// `screen_keys` followed by the global ones.
fn with_global_keys(screen_keys: &[(&'static str, &'static str)]) -> KeyHints {
    screen_keys.iter().chain(GLOBAL_KEYS.iter()).copied().collect()
}
