//! Application engine for TJD-Toolkit.
//!
//! This crate contains the App state machine without TUI dependencies. All
//! timing is driven through `tick`, so every state transition is reproducible
//! from a sequence of inputs and instants.

mod app;
pub mod home;
pub mod navigation;
pub mod quick_type;
mod settings;

pub use app::{App, PendingConfirm, StatusKind, StatusMessage, WordPickerFactory};
pub use home::{HomeCard, HomeState, Loading, OpenOutcome, ToolCard};
pub use navigation::{NavigationError, Navigator};
pub use quick_type::{
    GameState, GameStatus, GameSummary, QuickTypeChallenge, RandomWordPicker, ScriptedWordPicker,
    SpeedRating, Stage, StatusTone, Submission, WordPicker,
};
pub use settings::ui_options_from_config;

pub use tjd_core::ConfigStore;
pub use tjd_types::ui::UiOptions;
pub use tjd_types::{Route, ThemeMode};
