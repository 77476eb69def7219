use tjd_core::ConfigStore;
use tjd_types::ThemeMode;
use tjd_types::ui::UiOptions;

#[must_use]
pub fn ui_options_from_config(config: &ConfigStore) -> UiOptions {
    let defaults = UiOptions::default();
    UiOptions {
        theme: ThemeMode::parse_lenient(&config.get_or("theme", String::new())),
        ascii_only: config.get_or("ui.ascii_only", defaults.ascii_only),
        reduced_motion: config.get_or("ui.reduced_motion", defaults.reduced_motion),
        show_tooltips: config.get_or("ui.show_tooltips", defaults.show_tooltips),
        confirm_destructive_actions: config.get_or(
            "ui.confirm_destructive_actions",
            defaults.confirm_destructive_actions,
        ),
    }
}

#[cfg(test)]
mod tests {
    use tjd_core::ConfigStore;
    use tjd_types::ThemeMode;
    use tjd_types::ui::UiOptions;

    use super::ui_options_from_config;

    #[test]
    fn defaults_match_default_config() {
        let options = ui_options_from_config(&ConfigStore::ephemeral());
        assert_eq!(options, UiOptions::default());
    }

    #[test]
    fn reads_stored_preferences() {
        let mut config = ConfigStore::ephemeral();
        config.set("theme", "DARK").expect("set");
        config.set("ui.ascii_only", true).expect("set");
        config.set("ui.show_tooltips", false).expect("set");
        let options = ui_options_from_config(&config);
        assert_eq!(options.theme, ThemeMode::Dark);
        assert!(options.ascii_only);
        assert!(!options.show_tooltips);
        assert!(options.confirm_destructive_actions);
    }

    #[test]
    fn wrong_types_fall_back_to_defaults() {
        let mut config = ConfigStore::ephemeral();
        config.set("ui.reduced_motion", "yes please").expect("set");
        config.set("theme", 42).expect("set");
        let options = ui_options_from_config(&config);
        assert!(!options.reduced_motion);
        assert_eq!(options.theme, ThemeMode::System);
    }
}
