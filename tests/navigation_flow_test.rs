// Integration tests for the startup flow and screen navigation

mod common;

use common::{app, app_on, app_with, ms};
use physioconnect::app::{AppMessage, ScreenId};
use physioconnect::config::AppConfig;
use physioconnect::screens::{resolve, resolve_route, ActiveScreen, PostureView, REGISTRY};

// =============================================================================
// Splash
// =============================================================================

#[test]
fn test_splash_transitions_to_home_exactly_once() {
    let mut app = app();
    let mut transitions = 0;
    let mut last = app.current_screen();

    for t in (0..=6000).step_by(100) {
        app.advance(ms(t));
        if app.current_screen() != last {
            transitions += 1;
            last = app.current_screen();
        }
    }
    assert_eq!(transitions, 1);
    assert_eq!(app.current_screen(), ScreenId::Home);
}

#[test]
fn test_skip_matches_timed_end_state() {
    let mut timed = app();
    timed.advance(ms(3000));

    let mut skipped = app();
    skipped.advance(ms(1200));
    skipped.skip_splash();

    assert_eq!(timed.navigator.current(), skipped.navigator.current());
    // The cancelled countdown never lands later
    skipped.navigate(ScreenId::TelePhysio);
    skipped.advance(ms(10_000));
    assert_eq!(skipped.current_screen(), ScreenId::TelePhysio);
}

#[test]
fn test_configured_splash_delay() {
    let mut app = app_with(AppConfig::default().with_splash_delay(ms(250)));
    app.advance(ms(249));
    assert_eq!(app.current_screen(), ScreenId::Splash);
    app.advance(ms(250));
    assert_eq!(app.current_screen(), ScreenId::Home);
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_every_screen_is_registered() {
    for id in ScreenId::ALL {
        assert_eq!(resolve(id).id, id);
    }
    assert_eq!(REGISTRY.len(), ScreenId::ALL.len());
}

#[test]
fn test_unknown_route_resolves_home() {
    for route in ["", "settings", "NEAR-THERAPY", "posture_iq"] {
        assert_eq!(resolve_route(route).id, ScreenId::Home, "route {route:?}");
    }
}

#[test]
fn test_navigate_every_screen_and_back() {
    let mut app = app_on(ScreenId::Home);
    for id in ScreenId::ALL.into_iter().filter(|id| id.is_feature()) {
        app.navigate(id);
        assert_eq!(app.current_screen(), id);
        assert_eq!(app.screen.id(), id);
        app.go_back();
        assert_eq!(app.current_screen(), ScreenId::Home);
    }
}

// =============================================================================
// Theme
// =============================================================================

#[test]
fn test_toggle_theme_twice_restores() {
    let mut app = app();
    let before = app.is_dark_mode();
    app.toggle_theme();
    app.toggle_theme();
    assert_eq!(app.is_dark_mode(), before);
}

#[test]
fn test_theme_survives_navigation() {
    let mut app = app_with(AppConfig::default().with_start_dark(true));
    app.skip_splash();
    app.navigate(ScreenId::Profile);
    assert!(app.is_dark_mode());
    assert!(app.hints.is_dark());
}

// =============================================================================
// PostureIQ with simulated time
// =============================================================================

#[test]
fn test_posture_analysis_round_trip_through_app() {
    let mut app = app_on(ScreenId::PostureIq);
    let delay = app.config.analysis_delay;
    if let ActiveScreen::PostureIq(screen) = &mut app.screen {
        assert!(screen.start_analysis(delay, &mut app.scheduler));
    }

    let start = app.scheduler.now();
    app.advance(start + delay - ms(1));
    assert!(matches!(&app.screen, ActiveScreen::PostureIq(s) if s.is_analyzing()));

    app.advance(start + delay);
    let ActiveScreen::PostureIq(screen) = &mut app.screen else {
        panic!("posture screen should still be mounted");
    };
    assert_eq!(screen.report().map(|r| r.overall_score), Some(78));

    assert!(screen.new_analysis());
    assert_eq!(screen.view(), &PostureView::Camera);
    assert!(screen.report().is_none());
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_message_channel_drives_app() {
    let mut app = app();
    let tx = app.message_tx.clone();
    let mut rx = app.message_rx.take().expect("receiver present");

    tx.send(AppMessage::Navigate(ScreenId::JournalLink)).unwrap();
    tx.send(AppMessage::Quit).unwrap();
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    assert_eq!(app.current_screen(), ScreenId::JournalLink);
    assert!(app.should_quit);
}
