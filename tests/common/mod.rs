//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use physioconnect::app::{App, ScreenId};
use physioconnect::config::AppConfig;
use physioconnect::content::Content;
use physioconnect::ui;
use ratatui::{backend::TestBackend, Terminal};

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn app_with(config: AppConfig) -> App {
    App::new(config, Box::new(Content::embedded().expect("embedded content parses")))
}

pub fn app() -> App {
    app_with(AppConfig::default())
}

pub fn app_on(screen: ScreenId) -> App {
    app_with(AppConfig::default().with_start_screen(screen))
}

/// Render `app` into a `width` x `height` test terminal and return the
/// screen as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
