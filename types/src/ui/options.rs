use crate::ThemeMode;

/// UI configuration options resolved from the config store at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub theme: ThemeMode,
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Disable intro, fade and shake animations.
    pub reduced_motion: bool,
    pub show_tooltips: bool,
    pub confirm_destructive_actions: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            ascii_only: false,
            reduced_motion: false,
            show_tooltips: true,
            confirm_destructive_actions: true,
        }
    }
}
