//! Keyboard handling for the App.
//!
//! Global keys are checked first. Anything left goes to the mounted
//! screen, which answers with an [`Intent`] the app then applies. Screens
//! that take text input (chat drafts, journal search) swallow printable keys
//! so they never trigger global shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, ScreenId, TimerEvent};
use crate::scheduler::Scheduler;
use crate::screens::{
    ActiveScreen, ArticleView, ChatView, ExerciseFitScreen, ExerciseView, HomeScreen,
    JournalLinkScreen, NearTherapyScreen, PostureIqScreen, PostureView, ProfileScreen,
    SettingsRow, TelePhysioScreen,
};
use crate::traits::ContentSource;

/// Time label on locally sent chat messages, e.g. `2:05 PM`.
const SENT_TIME_FORMAT: &str = "%-I:%M %p";

/// Home tiles are laid out two per row.
const HOME_COLUMNS: isize = 2;

/// What a screen asks the app to do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    None,
    Redraw,
    Navigate(ScreenId),
    Back,
    ToggleTheme,
    SkipSplash,
}

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if !self.is_text_input_active() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char('d') => {
                    self.toggle_theme();
                    return;
                }
                _ => {}
            }
        }

        let content = self.content.as_ref();
        let intent = match &mut self.screen {
            ActiveScreen::Splash(_) => splash_key(key),
            ActiveScreen::Home(screen) => home_key(screen, key, content),
            ActiveScreen::NearTherapy(screen) => near_therapy_key(screen, key, content),
            ActiveScreen::ExerciseFit(screen) => exercise_fit_key(screen, key, content),
            ActiveScreen::TelePhysio(screen) => tele_physio_key(screen, key, content),
            ActiveScreen::JournalLink(screen) => journal_link_key(screen, key, content),
            ActiveScreen::PostureIq(screen) => {
                posture_iq_key(screen, key, &mut self.scheduler, self.config.analysis_delay)
            }
            ActiveScreen::Profile(screen) => profile_key(screen, key),
        };
        self.apply_intent(intent);
    }

    /// Whether printable keys are currently being typed into a field.
    pub fn is_text_input_active(&self) -> bool {
        match &self.screen {
            ActiveScreen::TelePhysio(screen) => matches!(screen.view(), ChatView::ActiveChat(_)),
            ActiveScreen::JournalLink(screen) => screen.is_searching(),
            _ => false,
        }
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::None => {}
            Intent::Redraw => self.mark_dirty(),
            Intent::Navigate(id) => self.navigate(id),
            Intent::Back => self.go_back(),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::SkipSplash => self.skip_splash(),
        }
    }
}

fn is_back(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h'))
}

fn redraw_if(changed: bool) -> Intent {
    if changed {
        Intent::Redraw
    } else {
        Intent::None
    }
}

fn splash_key(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Intent::SkipSplash,
        _ => Intent::None,
    }
}

fn home_key(screen: &mut HomeScreen, key: KeyEvent, content: &dyn ContentSource) -> Intent {
    let delta = match key.code {
        KeyCode::Left => -1,
        KeyCode::Right | KeyCode::Tab => 1,
        KeyCode::Up | KeyCode::Char('k') => -HOME_COLUMNS,
        KeyCode::Down | KeyCode::Char('j') => HOME_COLUMNS,
        KeyCode::Enter => {
            return screen
                .selected_target(content)
                .map_or(Intent::None, Intent::Navigate);
        }
        KeyCode::Char('p') => return Intent::Navigate(ScreenId::Profile),
        _ => return Intent::None,
    };
    screen.move_cursor(delta, content);
    Intent::Redraw
}

fn near_therapy_key(
    screen: &mut NearTherapyScreen,
    key: KeyEvent,
    content: &dyn ContentSource,
) -> Intent {
    match key.code {
        KeyCode::Tab => screen.toggle_view(),
        KeyCode::Char('m') => screen.show_map(),
        KeyCode::Char('l') => screen.show_list(),
        KeyCode::Up | KeyCode::Char('k') => screen.move_cursor(-1, content),
        KeyCode::Down | KeyCode::Char('j') => screen.move_cursor(1, content),
        KeyCode::Enter => return redraw_if(screen.select_at_cursor(content)),
        _ if is_back(&key) => return Intent::Back,
        _ => return Intent::None,
    }
    Intent::Redraw
}

fn exercise_fit_key(
    screen: &mut ExerciseFitScreen,
    key: KeyEvent,
    content: &dyn ContentSource,
) -> Intent {
    if is_back(&key) {
        return Intent::Back;
    }
    if let ExerciseView::Detail(_) = screen.view() {
        return Intent::None;
    }
    match key.code {
        KeyCode::Left => screen.cycle_category(false, content),
        KeyCode::Right | KeyCode::Tab => screen.cycle_category(true, content),
        KeyCode::Up | KeyCode::Char('k') => screen.move_cursor(-1, content),
        KeyCode::Down | KeyCode::Char('j') => screen.move_cursor(1, content),
        KeyCode::Enter => return redraw_if(screen.open_at_cursor(content)),
        _ => return Intent::None,
    }
    Intent::Redraw
}

fn tele_physio_key(
    screen: &mut TelePhysioScreen,
    key: KeyEvent,
    content: &dyn ContentSource,
) -> Intent {
    match screen.view() {
        ChatView::ConversationList => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                screen.move_cursor(-1, content);
                Intent::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') => {
                screen.move_cursor(1, content);
                Intent::Redraw
            }
            KeyCode::Enter => redraw_if(screen.open_at_cursor(content)),
            _ if is_back(&key) => Intent::Back,
            _ => Intent::None,
        },
        ChatView::ActiveChat(_) => match key.code {
            KeyCode::Esc => Intent::Back,
            KeyCode::Enter => {
                let time = chrono::Local::now().format(SENT_TIME_FORMAT).to_string();
                redraw_if(screen.send_draft(time, content))
            }
            KeyCode::Backspace => {
                screen.pop_char();
                Intent::Redraw
            }
            KeyCode::Char(c) => {
                screen.push_char(c);
                Intent::Redraw
            }
            _ => Intent::None,
        },
    }
}

fn journal_link_key(
    screen: &mut JournalLinkScreen,
    key: KeyEvent,
    content: &dyn ContentSource,
) -> Intent {
    if screen.is_searching() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => screen.stop_search(),
            KeyCode::Backspace => screen.pop_query(),
            KeyCode::Char(c) => screen.push_query(c),
            _ => return Intent::None,
        }
        return Intent::Redraw;
    }

    match screen.view() {
        ArticleView::ArticleDetail(id) => match key.code {
            KeyCode::Char('b') => {
                screen.toggle_bookmark(id);
                Intent::Redraw
            }
            _ if is_back(&key) => Intent::Back,
            _ => Intent::None,
        },
        ArticleView::ArticleList => {
            match key.code {
                KeyCode::Char('/') => screen.start_search(),
                KeyCode::Left => screen.cycle_category(false, content),
                KeyCode::Right | KeyCode::Tab => screen.cycle_category(true, content),
                KeyCode::Up | KeyCode::Char('k') => screen.move_cursor(-1, content),
                KeyCode::Down | KeyCode::Char('j') => screen.move_cursor(1, content),
                KeyCode::Char('b') => {
                    let Some(id) = screen.article_at_cursor(content).map(|a| a.id) else {
                        return Intent::None;
                    };
                    screen.toggle_bookmark(id);
                }
                KeyCode::Enter => return redraw_if(screen.open_at_cursor(content)),
                _ if is_back(&key) => return Intent::Back,
                _ => return Intent::None,
            }
            Intent::Redraw
        }
    }
}

fn posture_iq_key(
    screen: &mut PostureIqScreen,
    key: KeyEvent,
    scheduler: &mut Scheduler<TimerEvent>,
    analysis_delay: std::time::Duration,
) -> Intent {
    if is_back(&key) {
        return Intent::Back;
    }
    let changed = match key.code {
        KeyCode::Enter | KeyCode::Char(' ') if *screen.view() == PostureView::Camera => {
            screen.start_analysis(analysis_delay, scheduler)
        }
        KeyCode::Enter | KeyCode::Char('e') => screen.view_exercises(),
        KeyCode::Char('n') => screen.new_analysis(),
        _ => false,
    };
    redraw_if(changed)
}

fn profile_key(screen: &mut ProfileScreen, key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => screen.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => screen.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => match screen.selected_row() {
            SettingsRow::DarkMode => return Intent::ToggleTheme,
            SettingsRow::Notifications => screen.toggle_notifications(),
            SettingsRow::Privacy => return Intent::None,
        },
        _ if is_back(&key) => return Intent::Back,
        _ => return Intent::None,
    }
    Intent::Redraw
}
