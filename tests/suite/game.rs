//! Quick Type Challenge rounds played through key events.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use tjd_engine::quick_type::{AUTO_NEXT_DELAY, MAX_INCORRECT_TRIES, SUMMARY_DELAY};
use tjd_engine::{GameState, Route, SpeedRating, Stage, StatusTone};

use crate::common::{open_feature_eins, press, scripted_app, start_round, type_text};

#[test]
fn full_round_from_first_word_to_summary() {
    let mut app = scripted_app(&["apple", "banana"]);
    let now = open_feature_eins(&mut app, Instant::now());
    assert_eq!(app.challenge().map(|c| c.stage()), Some(Stage::Ready));

    let shown = start_round(&mut app, now);
    let game = app.challenge().expect("challenge");
    assert_eq!(game.stage(), Stage::Playing);
    assert_eq!(game.word(), Some("apple"));
    assert_eq!(game.state(), GameState::Idle);

    // The clock starts with the first keystroke.
    let typed_at = shown + Duration::from_secs(1);
    type_text(&mut app, "apple", typed_at);
    assert_eq!(app.challenge().map(|c| c.state()), Some(GameState::Started));
    press(&mut app, &[KeyCode::Enter], typed_at + Duration::from_secs(1));

    let game = app.challenge().expect("challenge");
    assert_eq!(game.stage(), Stage::Advancing);
    assert!(game.input_locked());
    assert_eq!(game.best_speed(), Some(5.0));
    assert!(game.is_new_record());
    let status = game.status().expect("status");
    assert_eq!(status.text, "Correct! Speed: 5.0 char/s");
    assert_eq!(status.tone, StatusTone::Success);

    let next = typed_at + Duration::from_secs(1) + AUTO_NEXT_DELAY;
    app.tick_at(next);
    let game = app.challenge().expect("challenge");
    assert_eq!(game.word(), Some("banana"));
    assert_eq!(game.typed(), "");
    assert!(!game.input_locked());

    for attempt in 1..=MAX_INCORRECT_TRIES {
        type_text(&mut app, "bananna", next);
        press(&mut app, &[KeyCode::Enter], next);
        assert_eq!(app.challenge().map(|c| c.incorrect_tries()), Some(attempt));
    }
    let game = app.challenge().expect("challenge");
    assert_eq!(game.stage(), Stage::Ending);
    assert_eq!(game.state(), GameState::Ended);
    assert_eq!(
        game.status().map(|s| s.tone),
        Some(StatusTone::Critical)
    );

    app.tick_at(next + SUMMARY_DELAY);
    let summary = app.challenge().expect("challenge").summary();
    assert_eq!(summary.correct_answers, 1);
    assert!((summary.average_speed - 5.0).abs() < f64::EPSILON);
    assert!((summary.best_speed - 5.0).abs() < f64::EPSILON);
    assert_eq!(summary.rating, SpeedRating::Fast);
}

#[test]
fn wrong_answer_clears_the_field_and_shakes() {
    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, Instant::now());
    let shown = start_round(&mut app, now);

    type_text(&mut app, "appel", shown);
    press(&mut app, &[KeyCode::Enter], shown);

    let game = app.challenge().expect("challenge");
    assert_eq!(game.typed(), "");
    assert_eq!(game.field_error(), Some("Incorrect! Try again."));
    assert!(game.shake_progress(shown).is_some());
    assert!(game.shake_progress(shown + Duration::from_secs(1)).is_none());

    // Typing again clears the field error.
    type_text(&mut app, "a", shown);
    assert_eq!(app.challenge().and_then(|c| c.field_error()), None);
}

#[test]
fn keys_before_the_word_appears_are_ignored() {
    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, Instant::now());
    press(&mut app, &[KeyCode::Enter], now);

    assert_eq!(app.challenge().map(|c| c.stage()), Some(Stage::Revealing));
    type_text(&mut app, "app", now);
    press(&mut app, &[KeyCode::Enter], now);

    let game = app.challenge().expect("challenge");
    assert_eq!(game.typed(), "");
    assert_eq!(game.incorrect_tries(), 0);
    assert_eq!(game.state(), GameState::Idle);
}

#[test]
fn backspace_edits_the_typed_word() {
    let mut app = scripted_app(&["apple"]);
    let now = open_feature_eins(&mut app, Instant::now());
    let shown = start_round(&mut app, now);

    type_text(&mut app, "applx", shown);
    press(&mut app, &[KeyCode::Backspace], shown);
    type_text(&mut app, "e", shown);
    assert_eq!(app.challenge().map(|c| c.typed().to_string()), Some("apple".into()));
}

#[test]
fn replay_keeps_the_best_speed_and_a_new_visit_resets_it() {
    let mut app = scripted_app(&["go"]);
    let now = open_feature_eins(&mut app, Instant::now());
    let shown = start_round(&mut app, now);

    type_text(&mut app, "go", shown);
    press(&mut app, &[KeyCode::Enter], shown + Duration::from_secs(1));
    let mut t = shown + Duration::from_secs(1) + AUTO_NEXT_DELAY;
    app.tick_at(t);
    for _ in 0..MAX_INCORRECT_TRIES {
        type_text(&mut app, "no", t);
        press(&mut app, &[KeyCode::Enter], t);
    }
    t += SUMMARY_DELAY;
    app.tick_at(t);
    assert_eq!(app.challenge().map(|c| c.stage()), Some(Stage::Summary));

    press(&mut app, &[KeyCode::Char('r')], t);
    let game = app.challenge().expect("challenge");
    assert_eq!(game.stage(), Stage::Revealing);
    assert_eq!(game.correct_answers(), 0);
    assert_eq!(game.incorrect_tries(), 0);
    assert_eq!(game.best_speed(), Some(2.0));

    press(&mut app, &[KeyCode::Esc], t);
    assert_eq!(app.route(), Route::Home);
    open_feature_eins(&mut app, t);
    assert_eq!(app.route(), Route::FeatureEins);
    assert_eq!(app.challenge().and_then(|c| c.best_speed()), None);
    assert_eq!(app.challenge().map(|c| c.stage()), Some(Stage::Ready));
}

#[test]
fn summary_enter_goes_home() {
    let mut app = scripted_app(&["go"]);
    let now = open_feature_eins(&mut app, Instant::now());
    let shown = start_round(&mut app, now);

    type_text(&mut app, "x", shown);
    for _ in 0..MAX_INCORRECT_TRIES {
        press(&mut app, &[KeyCode::Enter], shown);
        type_text(&mut app, "x", shown);
    }
    app.tick_at(shown + SUMMARY_DELAY);
    let summary = app.challenge().expect("challenge").summary();
    assert_eq!(summary.correct_answers, 0);
    assert_eq!(summary.rating, SpeedRating::Slow);

    press(&mut app, &[KeyCode::Enter], shown + SUMMARY_DELAY);
    assert_eq!(app.route(), Route::Home);
}
