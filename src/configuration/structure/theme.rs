use std::{collections::BTreeMap, fs, path::Path};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::configuration::{errors::ConfigurationError, traits::ResolvableConfiguration};


/// Token name to (opaque) token value, e.g. `primary` to `#797d62`.
pub type TokenMap = BTreeMap<String, String>;


#[derive(Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub(crate) struct UnresolvedThemeExtension {
    categories: BTreeMap<String, TokenMap>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(super) struct UnresolvedThemeConfiguration {
    #[serde(default)]
    extend: UnresolvedThemeExtension,
}


/// Design tokens grouped by category (`colors`, `transitionProperty`, ...).
///
/// Used both for a configuration's `theme.extend` block and for the
/// generator's built-in defaults it is layered over.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ThemeExtension {
    categories: BTreeMap<String, TokenMap>,
}

/// The `theme` table. Only extending the generator's defaults is supported,
/// replacing them is not.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfiguration {
    pub extend: ThemeExtension,
}


impl ResolvableConfiguration for UnresolvedThemeExtension {
    type Resolved = ThemeExtension;

    fn resolve(self) -> Result<Self::Resolved> {
        for (category, tokens) in &self.categories {
            if category.is_empty() {
                return Err(ConfigurationError::EmptyCategoryName.into());
            }

            if tokens.keys().any(String::is_empty) {
                return Err(ConfigurationError::EmptyTokenName {
                    category: category.clone(),
                }
                .into());
            }
        }

        Ok(ThemeExtension {
            categories: self.categories,
        })
    }
}

impl ResolvableConfiguration for UnresolvedThemeConfiguration {
    type Resolved = ThemeConfiguration;

    fn resolve(self) -> Result<Self::Resolved> {
        let extend = self
            .extend
            .resolve()
            .wrap_err("Failed to resolve theme.extend table.")?;

        Ok(ThemeConfiguration { extend })
    }
}


impl ThemeExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with one more token.
    /// A token with the same category and name is replaced.
    #[must_use = "function returns the extended theme"]
    pub fn with_token<C, N, V>(mut self, category: C, name: N, value: V) -> Self
    where
        C: Into<String>,
        N: Into<String>,
        V: Into<String>,
    {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(name.into(), value.into());

        self
    }

    /// Load a defaults file: every top-level table is a category,
    /// every key inside it a token.
    ///
    /// ```toml
    /// [colors]
    /// red = "#ff0000"
    /// ```
    pub fn load_from_path<S: AsRef<Path>>(theme_file_path: S) -> Result<Self> {
        let theme_file_path = theme_file_path.as_ref();

        let theme_string = fs::read_to_string(theme_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!("Could not read theme file at {}.", theme_file_path.display())
            })?;

        let theme = Self::load_from_str(&theme_string)
            .wrap_err_with(|| miette!("Invalid theme file at {}.", theme_file_path.display()))?;

        debug!(
            path = %theme_file_path.display(),
            categories = theme.len(),
            "Loaded theme defaults."
        );

        Ok(theme)
    }

    pub fn load_from_str(theme_string: &str) -> Result<Self> {
        toml::from_str::<UnresolvedThemeExtension>(theme_string)
            .into_diagnostic()
            .wrap_err("Could not parse theme.")?
            .resolve()
    }

    /// Layer `self` over `defaults`, one category at a time.
    ///
    /// - a category present in both is the union of both token maps,
    ///   and on a name collision `self` wins,
    /// - a category only present in `defaults` is passed through untouched,
    /// - a category only present in `self` is added as-is.
    ///
    /// The merge is one level deep: token values are replaced, never merged.
    #[must_use = "function returns the merged theme"]
    pub fn layered_over(&self, defaults: &ThemeExtension) -> ThemeExtension {
        let mut categories = defaults.categories.clone();

        for (category, tokens) in &self.categories {
            let merged_tokens = categories.entry(category.clone()).or_default();

            for (name, value) in tokens {
                if let Some(previous) = merged_tokens.insert(name.clone(), value.clone()) {
                    trace!(
                        category = %category,
                        token = %name,
                        default_value = %previous,
                        extension = %value,
                        "Extension token overrides default."
                    );
                }
            }
        }

        ThemeExtension { categories }
    }

    pub fn category(&self, category: &str) -> Option<&TokenMap> {
        self.categories.get(category)
    }

    pub fn token(&self, category: &str, name: &str) -> Option<&str> {
        self.category(category)
            .and_then(|tokens| tokens.get(name))
            .map(String::as_str)
    }

    /// Categories in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &TokenMap)> {
        self.categories
            .iter()
            .map(|(category, tokens)| (category.as_str(), tokens))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn defaults() -> ThemeExtension {
        ThemeExtension::new()
            .with_token("colors", "red", "#ff0000")
            .with_token("colors", "primary", "#0000ff")
            .with_token("spacing", "4", "1rem")
            .with_token("spacing", "8", "2rem")
    }

    fn extension() -> ThemeExtension {
        ThemeExtension::new()
            .with_token("colors", "primary", "#797d62")
            .with_token("colors", "secondary", "#9B9B7A")
            .with_token("transitionProperty", "top-font-color", "top, font-size, color")
    }

    #[test]
    fn adds_extension_tokens_to_existing_category() {
        let defaults = ThemeExtension::new().with_token("color", "red", "#ff0000");
        let extension = ThemeExtension::new().with_token("color", "primary", "#797d62");

        let expected = ThemeExtension::new()
            .with_token("color", "red", "#ff0000")
            .with_token("color", "primary", "#797d62");

        assert_eq!(extension.layered_over(&defaults), expected);
    }

    #[test]
    fn extension_wins_on_collision_and_keeps_other_defaults() {
        let merged = extension().layered_over(&defaults());

        assert_eq!(merged.token("colors", "primary"), Some("#797d62"));
        assert_eq!(merged.token("colors", "red"), Some("#ff0000"));
        assert_eq!(merged.token("colors", "secondary"), Some("#9B9B7A"));
        assert_eq!(merged.category("colors").map(TokenMap::len), Some(3));
    }

    #[test]
    fn categories_missing_from_extension_pass_through() {
        let defaults = defaults();
        let merged = extension().layered_over(&defaults);

        assert_eq!(merged.category("spacing"), defaults.category("spacing"));
    }

    #[test]
    fn categories_missing_from_defaults_are_added() {
        let merged = extension().layered_over(&defaults());

        assert_eq!(
            merged.token("transitionProperty", "top-font-color"),
            Some("top, font-size, color")
        );
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn categories_iterate_in_lexicographic_order() {
        let theme = ThemeExtension::load_from_str(
            r##"
            [transitionProperty]
            top-font-color = "top, font-size, color"

            [colors]
            primary = "#797d62"

            [borderRadius]
            lg = "0.5rem"
            "##,
        )
        .unwrap();

        let names: Vec<&str> = theme.categories().map(|(category, _)| category).collect();
        assert_eq!(names, ["borderRadius", "colors", "transitionProperty"]);

        let (_, colors) = theme.categories().nth(1).unwrap();
        assert_eq!(colors.get("primary").map(String::as_str), Some("#797d62"));
    }

    #[test]
    fn empty_extension_category_is_kept_after_merge() {
        let extension = ThemeExtension::load_from_str("[spacing]").unwrap();
        let merged = extension.layered_over(&defaults().with_token("colors", "blue", "#00f"));

        assert!(merged.category("spacing").is_some());
        assert_eq!(merged.category("spacing").map(TokenMap::len), Some(2));

        let merged = extension.layered_over(&ThemeExtension::new());
        assert_eq!(merged.category("spacing"), Some(&TokenMap::new()));
    }

    #[test]
    fn empty_extension_returns_defaults() {
        let defaults = defaults();
        assert_eq!(ThemeExtension::new().layered_over(&defaults), defaults);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let defaults = defaults();
        let extension = extension();

        let first = extension.layered_over(&defaults);
        let second = extension.layered_over(&defaults);

        assert_eq!(first, second);
        assert_eq!(defaults, self::defaults());
        assert_eq!(extension, self::extension());
    }

    #[test]
    fn loads_defaults_from_toml() {
        let theme = ThemeExtension::load_from_str(
            r##"
            [colors]
            red = "#ff0000"

            [transitionProperty]
            colors = "color, background-color"
            "##,
        )
        .unwrap();

        assert_eq!(theme.token("colors", "red"), Some("#ff0000"));
        assert_eq!(
            theme.token("transitionProperty", "colors"),
            Some("color, background-color")
        );
    }

    #[test]
    fn loads_defaults_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[colors]\nred = \"#ff0000\"").unwrap();

        let theme = ThemeExtension::load_from_path(file.path()).unwrap();
        assert_eq!(theme, ThemeExtension::new().with_token("colors", "red", "#ff0000"));
    }

    #[test]
    fn rejects_non_string_token_values() {
        // Array values (e.g. font stacks) are not modelled.
        assert!(ThemeExtension::load_from_str("[fontFamily]\nsans = [\"system-ui\"]").is_err());
    }

    #[test]
    fn rejects_empty_token_name() {
        let report = ThemeExtension::load_from_str("[colors]\n\"\" = \"#000000\"").unwrap_err();

        assert_eq!(
            report.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::EmptyTokenName {
                category: "colors".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_category_name() {
        let report = ThemeExtension::load_from_str("[\"\"]\nred = \"#ff0000\"").unwrap_err();

        assert_eq!(
            report.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::EmptyCategoryName)
        );
    }

    #[test]
    fn theme_block_rejects_keys_outside_extend() {
        let result = toml::from_str::<UnresolvedThemeConfiguration>("[colors]\nred = \"#ff0000\"");
        assert!(result.is_err());
    }
}
