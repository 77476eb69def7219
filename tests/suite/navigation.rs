//! Launcher and view-stack behavior driven through key events.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode};

use tjd_engine::{NavigationError, Route, StatusKind};
use tjd_tui::apply_event;

use crate::common::{ctrl, open_feature_eins, press, scripted_app};

#[test]
fn enter_shows_loading_then_opens_the_tool() {
    let mut app = scripted_app(&["apple"]);
    let now = Instant::now();

    press(&mut app, &[KeyCode::Enter], now);
    let loading = app.home().loading().expect("loading overlay");
    assert_eq!(loading.message(), "Loading Feature Eins ...");
    assert_eq!(app.route(), Route::Home);

    // Keys other than quit are swallowed while loading.
    press(&mut app, &[KeyCode::Right, KeyCode::Char('t')], now);
    assert_eq!(app.home().selected(), 0);

    app.tick_at(now + Duration::from_millis(100));
    assert_eq!(app.route(), Route::Home);
    app.tick_at(now + Duration::from_millis(300));
    assert_eq!(app.route(), Route::FeatureEins);
    assert_eq!(app.navigator().depth(), 2);
    assert!(app.challenge().is_some());
}

#[test]
fn coming_soon_card_reports_instead_of_navigating() {
    let mut app = scripted_app(&["apple"]);
    let now = Instant::now();

    press(&mut app, &[KeyCode::Right, KeyCode::Enter], now);
    assert_eq!(app.home().selected(), 1);
    assert!(app.home().loading().is_none());
    assert_eq!(app.route(), Route::Home);
    assert_eq!(
        app.status().map(|s| s.text.as_str()),
        Some("Feature Zwei is coming soon")
    );
}

#[test]
fn escape_in_the_tool_returns_home_and_drops_the_round() {
    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, Instant::now());

    press(&mut app, &[KeyCode::Esc], now);
    assert_eq!(app.route(), Route::Home);
    assert_eq!(app.navigator().depth(), 1);
    assert!(app.challenge().is_none());
    assert!(!app.should_quit());
}

#[test]
fn unknown_route_lands_on_home_with_an_error() {
    let mut app = scripted_app(&["apple"]);
    let err = app.go("/nowhere").expect_err("unknown route");
    assert_eq!(
        err,
        NavigationError::UnknownRoute {
            route: "/nowhere".to_string()
        }
    );
    assert_eq!(app.route(), Route::Home);
    let status = app.status().expect("error status");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Unknown route: /nowhere");
}

#[test]
fn popping_the_launcher_is_an_error() {
    let mut app = scripted_app(&["apple"]);
    assert_eq!(app.pop_view(), Err(NavigationError::EmptyStack));
    assert_eq!(app.route(), Route::Home);
}

#[test]
fn quit_keys() {
    let now = Instant::now();

    let mut app = scripted_app(&["apple"]);
    assert!(press(&mut app, &[KeyCode::Char('q')], now));

    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, now);
    assert!(apply_event(&mut app, ctrl('c'), now));
    assert!(app.should_quit());
}

#[test]
fn pasted_text_is_ignored() {
    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, Instant::now());
    press(&mut app, &[KeyCode::Enter], now);

    assert!(!apply_event(&mut app, Event::Paste("apple".into()), now));
    assert_eq!(app.challenge().map(|c| c.typed().to_string()), Some(String::new()));
}
