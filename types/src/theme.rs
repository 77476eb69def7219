use std::fmt;

/// Color scheme preference persisted under the `theme` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the terminal's own foreground/background.
    #[default]
    System,
}

impl ThemeMode {
    /// Parse a stored preference. Unknown values fall back to `System`.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::System,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next mode in the launcher's theme toggle: light -> dark -> system -> light.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ThemeMode::parse_lenient("DARK"), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse_lenient(" light "), ThemeMode::Light);
        assert_eq!(ThemeMode::parse_lenient("System"), ThemeMode::System);
    }

    #[test]
    fn unknown_mode_falls_back_to_system() {
        assert_eq!(ThemeMode::parse_lenient("solarized"), ThemeMode::System);
        assert_eq!(ThemeMode::parse_lenient(""), ThemeMode::System);
    }

    #[test]
    fn cycle_visits_every_mode() {
        let start = ThemeMode::Light;
        assert_eq!(start.cycle(), ThemeMode::Dark);
        assert_eq!(start.cycle().cycle(), ThemeMode::System);
        assert_eq!(start.cycle().cycle().cycle(), start);
    }
}
