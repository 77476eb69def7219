//! Application state: everything the TUI draws and every action input can take.

use std::time::Instant;

use tjd_core::ConfigStore;
use tjd_types::Route;
use tjd_types::ui::UiOptions;

use crate::home::{HomeState, OpenOutcome};
use crate::navigation::{NavigationError, Navigator};
use crate::quick_type::{QuickTypeChallenge, RandomWordPicker, Submission, WordPicker};
use crate::settings::ui_options_from_config;

/// Builds a fresh word source for each visit to the challenge.
pub type WordPickerFactory = Box<dyn Fn() -> Box<dyn WordPicker> + Send>;

/// An action waiting for the user to confirm it in a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingConfirm {
    ResetSettings,
}

impl PendingConfirm {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ResetSettings => "Reset settings",
        }
    }

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::ResetSettings => "Restore every setting to its default value?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    config: ConfigStore,
    ui_options: UiOptions,
    navigator: Navigator,
    home: HomeState,
    /// Present while the Feature Eins view is open; rebuilt on every visit.
    challenge: Option<QuickTypeChallenge>,
    word_pickers: WordPickerFactory,
    pending: Option<PendingConfirm>,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: ConfigStore) -> Self {
        let ui_options = ui_options_from_config(&config);
        tracing::info!(
            theme = ui_options.theme.as_str(),
            persisted = !config.is_ephemeral(),
            "App initialized"
        );
        Self {
            config,
            ui_options,
            navigator: Navigator::new(),
            home: HomeState::default(),
            challenge: None,
            word_pickers: Box::new(|| Box::new(RandomWordPicker)),
            pending: None,
            status: None,
            should_quit: false,
        }
    }

    /// Replace the word source, e.g. with a scripted one for deterministic runs.
    #[must_use]
    pub fn with_word_picker<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn WordPicker> + Send + 'static,
    {
        self.word_pickers = Box::new(factory);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn challenge(&self) -> Option<&QuickTypeChallenge> {
        self.challenge.as_ref()
    }

    pub fn pending_confirm(&self) -> Option<PendingConfirm> {
        self.pending
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn go(&mut self, path: &str) -> Result<Route, NavigationError> {
        let result = self.navigator.go(path);
        if let Err(err) = &result {
            self.set_error(err.to_string());
        }
        self.enter_route(self.navigator.current());
        result
    }

    pub fn go_home(&mut self) {
        self.navigator.show(Route::Home);
        self.enter_route(Route::Home);
    }

    pub fn pop_view(&mut self) -> Result<Route, NavigationError> {
        let route = self.navigator.pop_view()?;
        self.enter_route(route);
        Ok(route)
    }

    fn enter_route(&mut self, route: Route) {
        self.pending = None;
        match route {
            Route::Home => {
                self.challenge = None;
                self.home.cancel_loading();
            }
            Route::FeatureEins => {
                self.clear_status();
                self.challenge = Some(QuickTypeChallenge::new((self.word_pickers)()));
            }
        }
    }

    // ------------------------------------------------------------------
    // Launcher
    // ------------------------------------------------------------------

    pub fn home_select_next(&mut self) {
        self.home.select_next();
    }

    pub fn home_select_prev(&mut self) {
        self.home.select_prev();
    }

    pub fn home_select_up(&mut self) {
        self.home.select_up();
    }

    pub fn home_select_down(&mut self) {
        self.home.select_down();
    }

    pub fn open_selected_card(&mut self, now: Instant) {
        match self.home.open_selected(&self.config, now) {
            OpenOutcome::Loading => self.clear_status(),
            OpenOutcome::ComingSoon(name) => self.set_status(format!("{name} is coming soon")),
            OpenOutcome::Disabled(name) => {
                self.set_status(format!("{name} is disabled in the settings"));
            }
            OpenOutcome::Busy => {}
        }
    }

    pub fn cycle_theme(&mut self) {
        let theme = self.ui_options.theme.cycle();
        self.ui_options.theme = theme;
        match self.config.set("theme", theme.as_str()) {
            Ok(()) => self.set_status(format!("Theme: {theme}")),
            Err(err) => self.report_save_failure(&err),
        }
    }

    pub fn request_reset_settings(&mut self) {
        if self.ui_options.confirm_destructive_actions {
            self.pending = Some(PendingConfirm::ResetSettings);
        } else {
            self.reset_settings();
        }
    }

    pub fn confirm_pending(&mut self) {
        if let Some(PendingConfirm::ResetSettings) = self.pending.take() {
            self.reset_settings();
        }
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    fn reset_settings(&mut self) {
        match self.config.reset_to_defaults() {
            Ok(()) => {
                self.ui_options = ui_options_from_config(&self.config);
                tracing::info!("Settings reset to defaults");
                self.set_status("Settings reset to defaults");
            }
            Err(err) => self.report_save_failure(&err),
        }
    }

    fn report_save_failure(&mut self, err: &tjd_core::ToolkitError) {
        tracing::error!("Failed to save settings: {err}");
        self.set_error(format!("Failed to save settings: {err}"));
    }

    // ------------------------------------------------------------------
    // Quick Type Challenge
    // ------------------------------------------------------------------

    pub fn start_challenge(&mut self, now: Instant) -> bool {
        self.challenge
            .as_mut()
            .is_some_and(|challenge| challenge.start(now))
    }

    pub fn challenge_input(&mut self, c: char, now: Instant) {
        if let Some(challenge) = self.challenge.as_mut() {
            challenge.input_char(c, now);
        }
    }

    pub fn challenge_backspace(&mut self) {
        if let Some(challenge) = self.challenge.as_mut() {
            challenge.backspace();
        }
    }

    pub fn challenge_submit(&mut self, now: Instant) -> Submission {
        self.challenge
            .as_mut()
            .map_or(Submission::Ignored, |challenge| challenge.submit(now))
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if let Some(path) = self.home.tick(now) {
            // Unknown paths are already reported through the status line.
            let _ = self.go(&path);
        }
        if let Some(challenge) = self.challenge.as_mut() {
            challenge.tick(now);
        }
    }
}
