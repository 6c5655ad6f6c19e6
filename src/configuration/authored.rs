//! The project's own configuration, compiled in.
//!
//! `data/configuration.toml` holds the same values for tools that
//! prefer reading it from disk.

use super::{
    Configuration, ContentSpec, PluginHandle, PluginReferences, ThemeConfiguration, ThemeExtension,
};

const CONTENT: &[&str] = &["./src/**/*.{html,js,svelte,ts}"];

const COLORS: &[(&str, &str)] = &[
    ("primary", "#797d62"),
    ("secondary", "#9B9B7A"),
    ("textPrimary", "#000000"),
    ("textSecondary", "#5A5A5A"),
    ("textTertiary", "#B3B3B3"),
];

const TRANSITION_PROPERTIES: &[(&str, &str)] = &[("top-font-color", "top, font-size, color")];


impl Configuration {
    /// The configuration authored for this project.
    pub fn authored() -> Self {
        let colors = COLORS
            .iter()
            .fold(ThemeExtension::new(), |theme, (name, value)| {
                theme.with_token("colors", *name, *value)
            });

        let extend = TRANSITION_PROPERTIES
            .iter()
            .fold(colors, |theme, (name, value)| {
                theme.with_token("transitionProperty", *name, *value)
            });

        Configuration {
            file_path: None,
            content: ContentSpec::from_static(CONTENT),
            theme: ThemeConfiguration { extend },
            plugins: PluginReferences::new(vec![PluginHandle::forms()]),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn shipped_configuration_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/configuration.toml")
    }

    #[test]
    fn content_is_the_authored_literal() {
        assert_eq!(
            Configuration::authored().resolve_content(),
            ["./src/**/*.{html,js,svelte,ts}"]
        );
    }

    #[test]
    fn only_plugin_is_forms() {
        assert_eq!(
            Configuration::authored().resolve_plugins(),
            [PluginHandle::forms()]
        );
    }

    #[test]
    fn extends_colors_and_transition_properties() {
        let configuration = Configuration::authored();
        let extend = &configuration.theme.extend;

        assert_eq!(extend.len(), 2);
        assert_eq!(extend.token("colors", "primary"), Some("#797d62"));
        assert_eq!(extend.token("colors", "secondary"), Some("#9B9B7A"));
        assert_eq!(extend.token("colors", "textPrimary"), Some("#000000"));
        assert_eq!(extend.token("colors", "textSecondary"), Some("#5A5A5A"));
        assert_eq!(extend.token("colors", "textTertiary"), Some("#B3B3B3"));
        assert_eq!(
            extend.token("transitionProperty", "top-font-color"),
            Some("top, font-size, color")
        );
        assert_eq!(extend.category("fontFamily"), None);
    }

    #[test]
    fn resolving_twice_gives_equal_results() {
        let configuration = Configuration::authored();
        let defaults = ThemeExtension::new()
            .with_token("colors", "red", "#ff0000")
            .with_token("spacing", "4", "1rem");

        assert_eq!(configuration.resolve_content(), configuration.resolve_content());
        assert_eq!(configuration.resolve_plugins(), configuration.resolve_plugins());
        assert_eq!(
            configuration.resolve_theme(&defaults),
            configuration.resolve_theme(&defaults)
        );
        assert_eq!(configuration, Configuration::authored());
    }

    #[test]
    fn authored_theme_keeps_default_colors() {
        let defaults = ThemeExtension::new()
            .with_token("colors", "red", "#ff0000")
            .with_token("colors", "primary", "#0000ff");

        let resolved = Configuration::authored().resolve_theme(&defaults);

        assert_eq!(resolved.token("colors", "red"), Some("#ff0000"));
        assert_eq!(resolved.token("colors", "primary"), Some("#797d62"));
        assert_eq!(resolved.category("colors").map(|tokens| tokens.len()), Some(6));
    }

    #[test]
    fn shipped_file_matches_authored_configuration() {
        let loaded = Configuration::load_from_path(shipped_configuration_path()).unwrap();

        assert!(loaded.file_path.is_some());
        assert_eq!(
            Configuration {
                file_path: None,
                ..loaded
            },
            Configuration::authored()
        );
    }
}
