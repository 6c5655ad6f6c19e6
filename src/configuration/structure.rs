use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;
use tracing::{debug, info};

pub use self::content::ContentSpec;
use self::content::UnresolvedContentConfiguration;
pub use self::plugins::{PluginHandle, PluginReferences};
use self::plugins::UnresolvedPluginsConfiguration;
pub use self::theme::{ThemeConfiguration, ThemeExtension, TokenMap};
use self::theme::UnresolvedThemeConfiguration;
use super::traits::{ResolvableConfiguration, ResolvableConfigurationWithContext};
use super::utilities::{get_configuration_file_path_in, get_default_configuration_file_path};

mod content;
mod plugins;
mod theme;



#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct UnresolvedConfiguration {
    /// Glob patterns to scan for class names.
    content: UnresolvedContentConfiguration,

    /// Design tokens.
    #[serde(default)]
    theme: UnresolvedThemeConfiguration,

    /// Plugins, in application order.
    plugins: UnresolvedPluginsConfiguration,
}


/// The entire configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// This is the file path this `Configuration` instance was loaded from.
    /// `None` if it was built in memory.
    pub file_path: Option<PathBuf>,

    /// Where the generator should look for class-name usage.
    pub content: ContentSpec,

    /// Design tokens layered over the generator's defaults.
    pub theme: ThemeConfiguration,

    /// Additional utilities and variants.
    pub plugins: PluginReferences,
}


impl ResolvableConfigurationWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = Option<PathBuf>;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved> {
        let content = self
            .content
            .resolve()
            .wrap_err("Failed to resolve content list.")?;

        let theme = self
            .theme
            .resolve()
            .wrap_err("Failed to resolve theme table.")?;

        let plugins = self
            .plugins
            .resolve()
            .wrap_err("Failed to resolve plugins list.")?;


        Ok(Configuration {
            file_path: context,
            content,
            theme,
            plugins,
        })
    }
}


impl Configuration {
    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        let configuration_file_path = configuration_file_path.as_ref();

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(configuration_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not read configuration file at {}.",
                    configuration_file_path.display()
                )
            })?;


        // Parse the string into the `UnresolvedConfiguration` structure and then resolve it.
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(&configuration_string)
                .into_diagnostic()
                .wrap_err("Could not parse configuration file!")?;


        let configuration_file_path = dunce::canonicalize(configuration_file_path)
            .into_diagnostic()
            .wrap_err("Could not canonicalize configuration file path!")?;

        let resolved_configuration = unresolved_configuration
            .resolve(Some(configuration_file_path))
            .wrap_err("Failed to resolve configuration.")?;

        info!(
            path = %configuration_file_path_for_log(&resolved_configuration),
            patterns = resolved_configuration.content.patterns().len(),
            categories = resolved_configuration.theme.extend.len(),
            plugins = resolved_configuration.plugins.handles().len(),
            "Configuration loaded."
        );

        Ok(resolved_configuration)
    }

    /// Load the configuration from the default path (`./data/configuration.toml`).
    pub fn load_from_default_path() -> Result<Configuration> {
        Configuration::load_from_path(
            get_default_configuration_file_path()
                .wrap_err_with(|| "Could not load configuration file at default path.")?,
        )
    }

    /// Load `{project_directory}/data/configuration.toml`.
    pub fn load_from_project_directory<P: AsRef<Path>>(project_directory: P) -> Result<Self> {
        let project_directory = project_directory.as_ref();

        Configuration::load_from_path(
            get_configuration_file_path_in(project_directory).wrap_err_with(|| {
                miette!(
                    "Could not load configuration file in project directory {}.",
                    project_directory.display()
                )
            })?,
        )
    }

    /// Parse and resolve a configuration that doesn't live in a file.
    pub fn load_from_str(configuration_string: &str) -> Result<Self> {
        let unresolved_configuration =
            toml::from_str::<UnresolvedConfiguration>(configuration_string)
                .into_diagnostic()
                .wrap_err("Could not parse configuration!")?;

        let resolved_configuration = unresolved_configuration
            .resolve(None)
            .wrap_err("Failed to resolve configuration.")?;

        debug!("In-memory configuration loaded.");

        Ok(resolved_configuration)
    }

    /// Directory the configuration file lives in, which is the root
    /// the content patterns are relative to.
    pub fn project_root(&self) -> Option<&Path> {
        self.file_path.as_deref().and_then(Path::parent)
    }

    /// Content glob patterns, exactly as authored.
    pub fn resolve_content(&self) -> &[String] {
        self.content.patterns()
    }

    /// This configuration's `theme.extend` block layered over the generator's
    /// built-in `base_defaults`. See [`ThemeExtension::layered_over`].
    pub fn resolve_theme(&self, base_defaults: &ThemeExtension) -> ThemeExtension {
        self.theme.extend.layered_over(base_defaults)
    }

    /// Plugins in declaration order, which is also application order.
    pub fn resolve_plugins(&self) -> &[PluginHandle] {
        self.plugins.handles()
    }
}

fn configuration_file_path_for_log(configuration: &Configuration) -> String {
    configuration
        .file_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<memory>".to_string())
}
