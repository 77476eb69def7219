//! Input handling for the TJD-Toolkit TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::debug;

use tjd_engine::{App, Route, Stage};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns whether the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev, Instant::now()) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns whether the app should quit.
pub fn apply_event(app: &mut App, event: Event, now: Instant) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            if app.pending_confirm().is_some() {
                handle_confirm(app, key);
                return app.should_quit();
            }

            match app.route() {
                Route::Home => handle_home(app, key, now),
                Route::FeatureEins => handle_feature_eins(app, key, now),
            }
        }
        Event::Paste(text) => {
            debug!(len = text.len(), "Ignoring pasted text");
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_pending(),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => app.cancel_pending(),
        _ => {}
    }
}

fn handle_home(app: &mut App, key: KeyEvent, now: Instant) {
    if app.home().loading().is_some() {
        if matches!(key.code, KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.home_select_prev(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.home_select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.home_select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.home_select_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_selected_card(now),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('r') => app.request_reset_settings(),
        _ => {}
    }
}

fn handle_feature_eins(app: &mut App, key: KeyEvent, now: Instant) {
    let Some(stage) = app.challenge().map(tjd_engine::QuickTypeChallenge::stage) else {
        return;
    };

    match stage {
        Stage::Ready => match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                app.start_challenge(now);
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => go_back(app),
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        Stage::Summary => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => go_back(app),
            KeyCode::Char('r') => {
                app.start_challenge(now);
            }
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        Stage::Revealing | Stage::Playing | Stage::Advancing | Stage::Ending => match key.code {
            KeyCode::Esc => go_back(app),
            KeyCode::Enter => {
                let outcome = app.challenge_submit(now);
                debug!(?outcome, "Submitted answer");
            }
            KeyCode::Backspace => app.challenge_backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                app.challenge_input(c, now);
            }
            _ => {}
        },
    }
}

fn go_back(app: &mut App) {
    if let Err(err) = app.pop_view() {
        debug!("{err}");
        app.go_home();
    }
}
