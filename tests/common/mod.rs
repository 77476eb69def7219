//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use tjd_engine::quick_type::{INTRO_DURATION, WORD_SETUP_DELAY};
use tjd_engine::{App, ConfigStore, ScriptedWordPicker};
use tjd_tui::apply_event;

/// An app with in-memory settings and a fixed word list.
pub fn scripted_app(words: &'static [&'static str]) -> App {
    App::new(ConfigStore::ephemeral())
        .with_word_picker(move || Box::new(ScriptedWordPicker::new(words.iter().copied())))
}

/// An app whose settings live in `dir/config.json`.
pub fn persisted_app(dir: &Path, words: &'static [&'static str]) -> App {
    let config = ConfigStore::open(dir).expect("open config");
    App::new(config)
        .with_word_picker(move || Box::new(ScriptedWordPicker::new(words.iter().copied())))
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Feed keys one by one. Returns the final quit flag.
pub fn press(app: &mut App, codes: &[KeyCode], now: Instant) -> bool {
    let mut quit = false;
    for code in codes {
        quit = apply_event(app, key(*code), now);
    }
    quit
}

pub fn type_text(app: &mut App, text: &str, now: Instant) {
    for c in text.chars() {
        apply_event(app, key(KeyCode::Char(c)), now);
    }
}

/// Open the first launcher card and let the loading overlay finish.
pub fn open_feature_eins(app: &mut App, now: Instant) -> Instant {
    press(app, &[KeyCode::Enter], now);
    let after = now + Duration::from_millis(300);
    app.tick_at(after);
    after
}

/// Start a round and wait until the first word is shown.
pub fn start_round(app: &mut App, now: Instant) -> Instant {
    press(app, &[KeyCode::Enter], now);
    let shown = now + INTRO_DURATION + WORD_SETUP_DELAY;
    app.tick_at(shown);
    shown
}
