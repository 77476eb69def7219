//! TJD-Toolkit CLI - Binary entry point and terminal session management.
//!
//! The CLI bridges [`tjd_engine`] (application state) and [`tjd_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`tjd_tui::InputPump`])
//! 3. Advance application state (`app.tick()`)
//! 4. Render frame

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{self, Stdout, Write, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tjd_core::{ConfigStore, LogSettings, app_data_dir, rotate_if_oversized};
use tjd_engine::App;
use tjd_tui::{InputPump, draw, handle_events};

const LOG_FILE_NAME: &str = "tjd-toolkit.log";
const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Open the config store, falling back to in-memory defaults.
///
/// Runs before tracing is installed, so problems are returned as warnings.
fn load_config() -> (ConfigStore, Vec<String>) {
    match ConfigStore::open_default() {
        Ok(config) => (config, Vec::new()),
        Err(e) => (
            ConfigStore::ephemeral(),
            vec![format!("Failed to load settings, using defaults: {e}")],
        ),
    }
}

fn init_tracing(settings: &LogSettings, mut init_warnings: Vec<String>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let log_file = if settings.file_logging {
        open_log_file(settings.max_log_size, &mut init_warnings)
    } else {
        None
    };

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, prefer "no logs" over corrupting the TUI by writing
    // to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file(
    max_log_size: u64,
    warnings: &mut Vec<String>,
) -> Option<(PathBuf, std::fs::File)> {
    let dir = match app_data_dir() {
        Ok(dir) => dir.join("logs"),
        Err(e) => {
            warnings.push(format!("No log directory available: {e}"));
            return None;
        }
    };
    if let Err(e) = fs::create_dir_all(&dir) {
        warnings.push(format!("Failed to create log dir {}: {e}", dir.display()));
        return None;
    }

    let path = dir.join(LOG_FILE_NAME);
    match rotate_if_oversized(&path, max_log_size) {
        Ok(true) => warnings.push(format!("Rotated oversized log {}", path.display())),
        Ok(false) => {}
        Err(e) => warnings.push(format!("Failed to rotate log {}: {e}", path.display())),
    }

    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some((path, file)),
        Err(e) => {
            warnings.push(format!("Failed to open log file {}: {e}", path.display()));
            None
        }
    }
}

/// Switch `out` into the modes the app runs in.
///
/// With bracketed paste on, a paste arrives as one `Event::Paste` instead of
/// a burst of key presses.
fn enter_session_modes<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, EnterAlternateScreen, EnableBracketedPaste)
}

fn leave_session_modes<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableBracketedPaste, LeaveAlternateScreen)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, bracketed paste and the alternate screen are restored on drop,
/// so the terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut out = stdout();
        if let Err(err) = enter_session_modes(&mut out) {
            let _ = disable_raw_mode();
            let _ = leave_session_modes(&mut out);
            return Err(err).context("failed to prepare terminal");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = leave_session_modes(&mut stdout());
                return Err(err).context("failed to create terminal");
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_session_modes(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let (config, warnings) = load_config();
    init_tracing(&LogSettings::from_config(&config), warnings);

    if let Some(path) = config.path() {
        tracing::info!(path = %path.display(), "Settings loaded");
    }

    let mut app = App::new(config);

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = &result {
        tracing::error!("Exited with error: {err:?}");
    }
    result
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
