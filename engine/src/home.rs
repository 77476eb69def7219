//! Tool launcher state.

use std::time::{Duration, Instant};

use tjd_core::ConfigStore;
use tjd_types::route_path_for_tool;
use tjd_types::ui::EffectTimer;

pub const HOME_TITLE: &str = "TJD Toolkit";
pub const HOME_SUBTITLE: &str = "{ A collection of simple tools for your digital toolbelt }";
pub const COMING_SOON_LABEL: &str = "Coming soon...";

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 2;
/// How long the loading overlay stays up before the tool view replaces the launcher.
pub const LOADING_DISPLAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCard {
    pub name: &'static str,
    pub description: &'static str,
    /// Boolean config key that enables the tool.
    pub config_key: &'static str,
}

impl ToolCard {
    #[must_use]
    pub fn route_path(&self) -> String {
        route_path_for_tool(self.name)
    }

    #[must_use]
    pub fn is_enabled(&self, config: &ConfigStore) -> bool {
        config.get_or(self.config_key, true)
    }
}

pub const AVAILABLE_TOOLS: &[ToolCard] = &[ToolCard {
    name: "Feature Eins",
    description: "Wouldn't you like to know...",
    config_key: "tools.feature_eins",
}];

pub const COMING_SOON_TOOLS: &[&str] = &["Feature Zwei"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeCard {
    Available(&'static ToolCard),
    ComingSoon(&'static str),
}

impl HomeCard {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Available(tool) => tool.name,
            Self::ComingSoon(name) => name,
        }
    }
}

/// Available tools first, then the placeholders.
#[must_use]
pub fn home_cards() -> Vec<HomeCard> {
    AVAILABLE_TOOLS
        .iter()
        .map(HomeCard::Available)
        .chain(COMING_SOON_TOOLS.iter().copied().map(HomeCard::ComingSoon))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loading {
    pub tool: &'static str,
    pub route_path: String,
    timer: EffectTimer,
}

impl Loading {
    #[must_use]
    pub fn message(&self) -> String {
        format!("Loading {} ...", self.tool)
    }

    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        self.timer.progress(now)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    Loading,
    ComingSoon(&'static str),
    Disabled(&'static str),
    /// A tool is already loading.
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    selected: usize,
    loading: Option<Loading>,
}

impl HomeState {
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<HomeCard> {
        home_cards().get(self.selected).copied()
    }

    #[must_use]
    pub fn loading(&self) -> Option<&Loading> {
        self.loading.as_ref()
    }

    pub fn select_next(&mut self) {
        let count = home_cards().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_prev(&mut self) {
        let count = home_cards().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    pub fn select_down(&mut self) {
        let target = self.selected + GRID_COLUMNS;
        if target < home_cards().len() {
            self.selected = target;
        }
    }

    pub fn select_up(&mut self) {
        if let Some(target) = self.selected.checked_sub(GRID_COLUMNS) {
            self.selected = target;
        }
    }

    pub fn open_selected(&mut self, config: &ConfigStore, now: Instant) -> OpenOutcome {
        if self.loading.is_some() {
            return OpenOutcome::Busy;
        }
        match self.selected_card() {
            Some(HomeCard::Available(tool)) if tool.is_enabled(config) => {
                tracing::info!(tool = tool.name, "Opening tool");
                self.loading = Some(Loading {
                    tool: tool.name,
                    route_path: tool.route_path(),
                    timer: EffectTimer::new(now, LOADING_DISPLAY),
                });
                OpenOutcome::Loading
            }
            Some(HomeCard::Available(tool)) => OpenOutcome::Disabled(tool.name),
            Some(HomeCard::ComingSoon(name)) => OpenOutcome::ComingSoon(name),
            None => OpenOutcome::Busy,
        }
    }

    /// Route path to navigate to once the loading overlay has been shown long enough.
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        if self.loading.as_ref()?.timer.is_finished(now) {
            return self.loading.take().map(|loading| loading.route_path);
        }
        None
    }

    pub fn cancel_loading(&mut self) {
        self.loading = None;
    }
}
