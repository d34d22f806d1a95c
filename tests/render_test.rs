// Integration tests for rendering every screen through a TestBackend

mod common;

use common::{app, app_on, app_with, ms, render_to_string};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use physioconnect::app::{App, ScreenId};
use physioconnect::config::AppConfig;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_splash_renders_brand_and_skip_hint() {
    let app = app();
    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("PhysioConnect"));
    assert!(screen.contains("Connect Your Home Care"));
    assert!(screen.contains("[Enter] Skip"));
}

#[test]
fn test_home_renders_greeting_progress_and_tiles() {
    let app = app_on(ScreenId::Home);
    let screen = render_to_string(&app, 100, 30);
    assert!(screen.contains("Welcome back, Alex"));
    assert!(screen.contains("Today's Progress"));
    assert!(screen.contains("Near Therapy"));
    assert!(screen.contains("Posture IQ"));
    assert!(screen.contains("Quit"));
}

#[test]
fn test_every_screen_renders_in_both_themes() {
    for dark in [false, true] {
        for id in ScreenId::ALL {
            let app = app_with(
                AppConfig::default()
                    .with_start_dark(dark)
                    .with_start_screen(id),
            );
            let screen = render_to_string(&app, 80, 24);
            assert!(!screen.trim().is_empty(), "{id} rendered nothing (dark={dark})");
        }
    }
}

#[test]
fn test_every_screen_renders_at_extreme_sizes() {
    for (w, h) in [(30, 40), (160, 20), (20, 8), (200, 60)] {
        for id in ScreenId::ALL {
            let app = app_on(id);
            render_to_string(&app, w, h);
        }
    }
}

#[test]
fn test_near_therapy_list_and_detail() {
    let mut app = app_on(ScreenId::NearTherapy);
    press(&mut app, KeyCode::Char('l'));
    let list = render_to_string(&app, 100, 30);
    assert!(list.contains("Dr. Sarah Johnson"));

    press(&mut app, KeyCode::Enter);
    let detail = render_to_string(&app, 100, 30);
    assert!(detail.contains("Hours:"));
    assert!(detail.contains("Phone:"));
}

#[test]
fn test_exercise_library_and_detail() {
    let mut app = app_on(ScreenId::ExerciseFit);
    let list = render_to_string(&app, 100, 30);
    assert!(list.contains("Exercise Library"));
    assert!(list.contains("Morning Stretches"));

    press(&mut app, KeyCode::Enter);
    let detail = render_to_string(&app, 100, 30);
    assert!(detail.contains("Duration"));
    assert!(detail.contains("Difficulty"));
}

#[test]
fn test_tele_physio_lists_consultations() {
    let app = app_on(ScreenId::TelePhysio);
    let screen = render_to_string(&app, 100, 30);
    assert!(screen.contains("Consultations"));
}

#[test]
fn test_journal_featured_and_articles() {
    let app = app_on(ScreenId::JournalLink);
    let screen = render_to_string(&app, 120, 40);
    assert!(screen.contains("FEATURED"));
    assert!(screen.contains("Articles"));
}

#[test]
fn test_posture_flow_renders_each_view() {
    let mut app = app_on(ScreenId::PostureIq);
    let camera = render_to_string(&app, 100, 30);
    assert!(camera.contains("Camera"));

    press(&mut app, KeyCode::Enter);
    let analyzing = render_to_string(&app, 100, 30);
    assert!(!analyzing.contains("Overall score"));

    let delay = app.config.analysis_delay;
    app.advance(app.scheduler.now() + delay);
    let results = render_to_string(&app, 100, 30);
    assert!(results.contains("Overall score"));
    assert!(results.contains("78"));

    press(&mut app, KeyCode::Char('e'));
    let exercises = render_to_string(&app, 100, 30);
    assert!(exercises.contains("Recommended Exercises"));
    assert!(exercises.contains("Neck Stretches"));
}

#[test]
fn test_profile_shows_settings_and_achievements() {
    let app = app_on(ScreenId::Profile);
    let screen = render_to_string(&app, 100, 40);
    assert!(screen.contains("Settings"));
    assert!(screen.contains("Achievements 2/4"));
}

#[test]
fn test_theme_toggle_changes_rendered_background() {
    let mut app = app_on(ScreenId::Home);

    let backend = ratatui::backend::TestBackend::new(40, 12);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|f| physioconnect::ui::render(f, &app)).unwrap();
    let light_bg = terminal.backend().buffer()[(0, 5)].bg;

    app.toggle_theme();
    terminal.draw(|f| physioconnect::ui::render(f, &app)).unwrap();
    let dark_bg = terminal.backend().buffer()[(0, 5)].bg;

    assert_ne!(light_bg, dark_bg);
}

#[test]
fn test_timed_splash_then_home_render() {
    let mut app = app();
    app.advance(ms(3000));
    let screen = render_to_string(&app, 80, 24);
    assert!(screen.contains("Welcome back"));
}
